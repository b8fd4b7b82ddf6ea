use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::io::Write;
use strum::{EnumString, VariantNames};

use crate::relation::Relation;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Eq,
    PartialEq,
    EnumString,
    VariantNames,
    ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    /// One code per line
    #[default]
    Plain,
    /// `Case #n: code (relation)` per line
    Verbose,
    /// One JSON object per line
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Verbose => "verbose",
            OutputFormat::Json => "json",
        })
    }
}

/// The classification of one test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub case: usize,
    pub code: i8,
    pub relation: Relation,
}

impl CaseReport {
    pub fn new(case: usize, relation: Relation) -> Self {
        Self {
            case,
            code: relation.code(),
            relation,
        }
    }
}

pub struct Emitter<W> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn emit(&mut self, report: &CaseReport) -> Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.writer, "{}", report.code)?,
            OutputFormat::Verbose => writeln!(
                self.writer,
                "Case #{}: {} ({})",
                report.case, report.code, report.relation
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, report)?;
                self.writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
