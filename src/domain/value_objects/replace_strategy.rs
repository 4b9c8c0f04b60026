//! How an existing directory is replaced with a fresh copy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Directory replacement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceStrategy {
    /// Copy into a hidden sibling, then swap it into place with renames.
    /// A failed copy leaves the previous directory untouched.
    #[default]
    Atomic,
    /// Delete the destination, then copy straight into it.
    InPlace,
}

impl ReplaceStrategy {
    pub const VALID_VALUES: &'static [&'static str] = &["atomic", "in-place"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplaceStrategy::Atomic => "atomic",
            ReplaceStrategy::InPlace => "in-place",
        }
    }
}

impl fmt::Display for ReplaceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplaceStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atomic" => Ok(ReplaceStrategy::Atomic),
            "in-place" | "inplace" | "in_place" => Ok(ReplaceStrategy::InPlace),
            other => Err(format!(
                "invalid strategy '{}' (expected one of: {})",
                other,
                Self::VALID_VALUES.join(", ")
            )),
        }
    }
}
