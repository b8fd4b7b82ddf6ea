use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::io::{BufRead, Write};

use crate::classifier::Classifier;
use crate::input::CaseReader;
use crate::output::{CaseReport, Emitter, OutputFormat};
use crate::relation::Relation;

/// How a run classifies and prints its cases
#[derive(Debug, Clone, Copy, Default, PartialEq, fieldwork::Fieldwork)]
#[fieldwork(get, with)]
pub struct Settings {
    #[fieldwork(get(copy))]
    classifier: Classifier,
    #[fieldwork(get(copy))]
    format: OutputFormat,
}

/// Tally of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub cases: usize,
    pub by_relation: BTreeMap<Relation, usize>,
}

impl Summary {
    fn record(&mut self, relation: Relation) {
        self.cases += 1;
        *self.by_relation.entry(relation).or_default() += 1;
    }

    pub fn count(&self, relation: Relation) -> usize {
        self.by_relation.get(&relation).copied().unwrap_or_default()
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} case(s)", self.cases)?;
        for (relation, count) in &self.by_relation {
            write!(f, ", {relation}: {count}")?;
        }
        Ok(())
    }
}

/// Reads every case from `input`, classifies it and writes one record per case to
/// `output`.
///
/// Records are written as each case is read, so when the input turns out to be
/// malformed everything before the bad case has already been emitted and flushed.
pub fn run<R: BufRead, W: Write>(input: R, output: W, settings: &Settings) -> Result<Summary> {
    let mut emitter = Emitter::new(output, settings.format());
    let mut summary = Summary::default();
    let result = classify_all(input, &mut emitter, settings.classifier(), &mut summary);
    emitter.flush()?;
    result?;
    log::info!("classified {summary}");
    Ok(summary)
}

fn classify_all<R: BufRead, W: Write>(
    input: R,
    emitter: &mut Emitter<W>,
    classifier: Classifier,
    summary: &mut Summary,
) -> Result<()> {
    let mut reader = CaseReader::new(input)?;
    log::debug!(
        "classifying {} case(s) in {} mode",
        reader.declared(),
        classifier.mode()
    );
    for case in &mut reader {
        let case = case?;
        let relation = classifier.classify_case(&case);
        log::debug!(
            "case {}: {:?} / {:?} -> {relation}",
            case.ordinal,
            case.first,
            case.second
        );
        emitter.emit(&CaseReport::new(case.ordinal, relation))?;
        summary.record(relation);
    }
    reader.finish()
}
