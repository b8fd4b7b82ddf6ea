use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use strum::{EnumString, VariantNames};

/// How two circles relate to each other
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    EnumString,
    VariantNames,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Same center and same radius: infinitely many common points
    Coincident,
    /// No common point, either apart or one strictly inside the other
    Separate,
    /// Exactly one common point, externally or internally
    Tangent,
    /// Exactly two common points
    Intersecting,
}

impl Relation {
    /// Numeric code written in plain output
    pub fn code(&self) -> i8 {
        match self {
            Relation::Coincident => -1,
            Relation::Separate => 0,
            Relation::Tangent => 1,
            Relation::Intersecting => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Coincident => "coincident",
            Relation::Separate => "separate",
            Relation::Tangent => "tangent",
            Relation::Intersecting => "intersecting",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
