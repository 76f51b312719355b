use std::fmt;

use serde::{Deserialize, Serialize};

/// Sex category used to key the reference chart.
///
/// Mapping from raw database sex codes to this category is an external
/// policy supplied by the caller (see `traits::ISexCodePolicy`); the
/// statistical core only ever sees the resolved category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}
