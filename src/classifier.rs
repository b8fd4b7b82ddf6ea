use anyhow::{bail, Result};
use clap::ValueEnum;
use std::fmt::{self, Display, Formatter};
use strum::{EnumString, VariantNames};

use crate::circle::{Circle, TestCase};
use crate::relation::Relation;

pub const DEFAULT_EPSILON: f64 = 1e-9;

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
pub enum PrecisionMode {
    /// Compare squared distances in integer arithmetic
    #[default]
    Exact,
    /// Compare the floating point distance against the radii within a tolerance
    Float,
}

impl Display for PrecisionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrecisionMode::Exact => "exact",
            PrecisionMode::Float => "float",
        })
    }
}

/// Decides the [`Relation`] between the two circles of a test case.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Classifier {
    #[default]
    Exact,
    Tolerant { epsilon: f64 },
}

impl Classifier {
    pub fn tolerant(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            bail!("epsilon must be a finite, non-negative number, got {epsilon}");
        }
        Ok(Self::Tolerant { epsilon })
    }

    pub fn for_mode(mode: PrecisionMode, epsilon: f64) -> Result<Self> {
        match mode {
            PrecisionMode::Exact => Ok(Self::Exact),
            PrecisionMode::Float => Self::tolerant(epsilon),
        }
    }

    pub fn mode(&self) -> PrecisionMode {
        match self {
            Classifier::Exact => PrecisionMode::Exact,
            Classifier::Tolerant { .. } => PrecisionMode::Float,
        }
    }

    pub fn classify_case(&self, case: &TestCase) -> Relation {
        self.classify(&case.first, &case.second)
    }

    pub fn classify(&self, a: &Circle, b: &Circle) -> Relation {
        if a.is_concentric_with(b) {
            return if a.radius == b.radius {
                Relation::Coincident
            } else {
                Relation::Separate
            };
        }

        match *self {
            Classifier::Exact => classify_exact(a, b),
            Classifier::Tolerant { epsilon } => classify_tolerant(a, b, epsilon),
        }
    }
}

fn classify_exact(a: &Circle, b: &Circle) -> Relation {
    let distance_squared = a.center_distance_squared(b);
    let r1 = i128::from(a.radius);
    let r2 = i128::from(b.radius);
    let sum = r1 + r2;
    let difference_squared = (r1 - r2) * (r1 - r2);
    // Squaring drops the sign of a negative sum, which no distance can reach.
    let inside_sum = sum > 0 && distance_squared < sum * sum;
    let touches_sum = sum >= 0 && distance_squared == sum * sum;

    if difference_squared < distance_squared && inside_sum {
        Relation::Intersecting
    } else if touches_sum || distance_squared == difference_squared {
        Relation::Tangent
    } else {
        Relation::Separate
    }
}

fn classify_tolerant(a: &Circle, b: &Circle, epsilon: f64) -> Relation {
    let distance = (a.center_distance_squared(b) as f64).sqrt();
    let sum = (i64::from(a.radius) + i64::from(b.radius)) as f64;
    let difference = (i64::from(a.radius) - i64::from(b.radius)).abs() as f64;
    let approx_eq = |x: f64, y: f64| (x - y).abs() <= epsilon;

    if difference + epsilon < distance && distance < sum - epsilon {
        Relation::Intersecting
    } else if approx_eq(distance, sum) || approx_eq(distance, difference) {
        Relation::Tangent
    } else {
        Relation::Separate
    }
}
