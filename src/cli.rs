use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::classifier::{Classifier, PrecisionMode, DEFAULT_EPSILON};
use crate::output::OutputFormat;
use crate::runner::Settings;

/// Classify how pairs of circles relate to each other.
///
/// Input is a case count followed by that many groups of six integers,
/// `x1 y1 r1 x2 y2 r2`. Each case prints -1 for identical circles, 0 when the
/// circles share no point, 1 when they touch at one point and 2 when they
/// cross at two.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about)]
pub struct Cli {
    /// Read test cases from this file instead of standard input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// How to print each classified case
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Compare distances exactly on integers, or as floating point within `--epsilon`
    #[arg(long, value_enum, default_value_t = PrecisionMode::Exact)]
    pub precision: PrecisionMode,

    /// Tolerance used by `--precision float`
    #[arg(long, default_value_t = DEFAULT_EPSILON, allow_negative_numbers = true)]
    pub epsilon: f64,
}

impl Cli {
    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings::default()
            .with_format(self.format)
            .with_classifier(Classifier::for_mode(self.precision, self.epsilon)?))
    }
}
