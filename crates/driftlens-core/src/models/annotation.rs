//! User-authored daily drift annotations.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Subjective label a user attaches to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftLabel {
    Breakthrough,
    Exploration,
    Confusion,
    Organizing,
    Stagnation,
    Routine,
}

impl DriftLabel {
    pub const ALL: [DriftLabel; 6] = [
        Self::Breakthrough,
        Self::Exploration,
        Self::Confusion,
        Self::Organizing,
        Self::Stagnation,
        Self::Routine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakthrough => "breakthrough",
            Self::Exploration => "exploration",
            Self::Confusion => "confusion",
            Self::Organizing => "organizing",
            Self::Stagnation => "stagnation",
            Self::Routine => "routine",
        }
    }
}

impl fmt::Display for DriftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriftLabel {
    type Err = ValidationError;

    /// Exact match only; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownLabel {
                value: s.to_string(),
            })
    }
}

/// Coarse direction of recent edits, computed outside this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftPhase {
    Creation,
    Destruction,
    Neutral,
}

impl DriftPhase {
    pub const ALL: [DriftPhase; 3] = [Self::Creation, Self::Destruction, Self::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creation => "creation",
            Self::Destruction => "destruction",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for DriftPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriftPhase {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPhase {
                value: s.to_string(),
            })
    }
}

/// Raw upsert payload as received from the host. Validated before use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationInput {
    pub date: String,
    pub label: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub auto_phase: Option<String>,
}

/// A validated annotation, unique per calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftAnnotation {
    pub date: NaiveDate,
    pub label: DriftLabel,
    pub note: Option<String>,
    /// Informational only; never recomputed here.
    pub auto_phase: Option<DriftPhase>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Agreement between a label and the system phase for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseMatch {
    Matched,
    Mismatched,
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseMatchCounts {
    pub matched: usize,
    pub mismatched: usize,
    pub unknown: usize,
}

impl PhaseMatchCounts {
    pub fn record(&mut self, result: PhaseMatch) {
        match result {
            PhaseMatch::Matched => self.matched += 1,
            PhaseMatch::Mismatched => self.mismatched += 1,
            PhaseMatch::Unknown => self.unknown += 1,
        }
    }

    /// `matched / (matched + mismatched)`, or `None` when nothing was comparable.
    pub fn agreement_rate(&self) -> Option<f64> {
        let comparable = self.matched + self.mismatched;
        if comparable == 0 {
            None
        } else {
            Some(self.matched as f64 / comparable as f64)
        }
    }
}

/// Descriptive statistics over annotations in a trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStats {
    pub total: usize,
    /// Every label is present, zero when unused.
    pub by_label: BTreeMap<DriftLabel, usize>,
    pub phase_match: PhaseMatchCounts,
}
