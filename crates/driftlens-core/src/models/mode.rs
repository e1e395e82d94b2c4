use std::fmt;

use serde::{Deserialize, Serialize};

/// Behavioral mode derived from trend and warning state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftMode {
    Exploration,
    Consolidation,
    Growth,
    Rest,
}

impl DriftMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exploration => "exploration",
            Self::Consolidation => "consolidation",
            Self::Growth => "growth",
            Self::Rest => "rest",
        }
    }
}

impl fmt::Display for DriftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
