//! Per-edit qualitative change classification.
//!
//! Serialized with camelCase field names: this is the blob shape the
//! edit-history store keeps alongside each edit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticChangeType {
    /// Content grew.
    Expansion,
    /// Content shrank.
    Contraction,
    /// The topic moved.
    Pivot,
    /// Same vocabulary, more depth.
    Deepening,
    /// Minor wording change.
    Refinement,
}

impl SemanticChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expansion => "expansion",
            Self::Contraction => "contraction",
            Self::Pivot => "pivot",
            Self::Deepening => "deepening",
            Self::Refinement => "refinement",
        }
    }
}

/// Structural metrics computed for one edit. All values rounded to 3 dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeMetrics {
    /// New length / old length, in characters.
    pub content_length_ratio: f64,
    /// Blend of embedding distance and vocabulary turnover, in [0, 1].
    pub topic_shift: f64,
    /// Jaccard index of the token sets, in [0, 1].
    pub vocabulary_overlap: f64,
    /// Heading and paragraph-shape similarity, in [0, 1].
    pub structural_similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticChangeDetail {
    #[serde(rename = "type")]
    pub change_type: SemanticChangeType,
    pub confidence: f64,
    pub magnitude: f64,
    /// Unit vector from the old embedding towards the new one. Omitted from
    /// the persisted form to save space, so it is absent after a read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Vec<f32>>,
    pub metrics: ChangeMetrics,
}

impl SemanticChangeDetail {
    /// Copy without the direction vector, as persisted by the edit history.
    pub fn without_direction(&self) -> Self {
        Self {
            direction: None,
            ..self.clone()
        }
    }
}
