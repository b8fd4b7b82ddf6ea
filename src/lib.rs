#![deny(dead_code)]

pub mod circle;
pub mod classifier;
pub mod cli;
pub mod input;
pub mod output;
pub mod relation;
pub mod runner;

pub use circle::{Circle, TestCase};
pub use classifier::{Classifier, PrecisionMode};
pub use output::{CaseReport, OutputFormat};
pub use relation::Relation;
pub use runner::{run, Settings, Summary};
