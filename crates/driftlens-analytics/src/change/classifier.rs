//! Change-type cascade over text metrics and embeddings.

use std::sync::Arc;

use driftlens_core::constants::{
    CHANGE_DECIMALS, CONTRACTION_MAX_RATIO, DEEPENING_MIN_OVERLAP,
    DEEPENING_STRUCTURE_BONUS_THRESHOLD, EXPANSION_MIN_RATIO, PIVOT_MIN_TOPIC_SHIFT,
    REFINEMENT_MAX_MAGNITUDE, TOPIC_SHIFT_EMBEDDING_WEIGHT, TOPIC_SHIFT_VOCABULARY_WEIGHT,
};
use driftlens_core::errors::{DriftLensResult, EmbeddingError};
use driftlens_core::models::{ChangeMetrics, SemanticChangeDetail, SemanticChangeType};
use driftlens_core::traits::IEmbeddingProvider;
use tracing::debug;

use super::structure::structural_similarity;
use super::tokenize::vocabulary_overlap;
use crate::numeric::round_to;
use crate::rules::{first_match, Rule};
use crate::similarity::cosine_distance;

/// Unrounded inputs to the classification cascade.
#[derive(Debug, Clone, Copy)]
struct ChangeSignals {
    magnitude: f64,
    topic_shift: f64,
    length_ratio: f64,
    vocabulary_overlap: f64,
    structural_similarity: f64,
}

type Classification = (SemanticChangeType, f64);
type ChangeRule = Rule<ChangeSignals, Classification>;

fn change_rules() -> [ChangeRule; 6] {
    [
        ChangeRule::new(
            "refinement",
            |s| s.magnitude < REFINEMENT_MAX_MAGNITUDE,
            |_| (SemanticChangeType::Refinement, 0.95),
        ),
        ChangeRule::new(
            "pivot",
            |s| s.topic_shift > PIVOT_MIN_TOPIC_SHIFT,
            |s| (SemanticChangeType::Pivot, (0.5 + 0.5 * s.topic_shift).min(0.95)),
        ),
        ChangeRule::new(
            "expansion",
            |s| s.length_ratio > EXPANSION_MIN_RATIO,
            |s| {
                let confidence = (0.5 + 0.4 * (s.length_ratio - 1.0)).min(0.9);
                (SemanticChangeType::Expansion, confidence)
            },
        ),
        ChangeRule::new(
            "contraction",
            |s| s.length_ratio < CONTRACTION_MAX_RATIO,
            |s| {
                let confidence = (0.5 + 0.4 * (1.0 - s.length_ratio)).min(0.9);
                (SemanticChangeType::Contraction, confidence)
            },
        ),
        ChangeRule::new(
            "deepening",
            |s| s.vocabulary_overlap > DEEPENING_MIN_OVERLAP,
            |s| {
                let bonus: f64 = if s.structural_similarity > DEEPENING_STRUCTURE_BONUS_THRESHOLD {
                    0.1
                } else {
                    0.0
                };
                (SemanticChangeType::Deepening, (0.6 + bonus).min(0.9))
            },
        ),
        ChangeRule::new(
            "uncertain",
            |_| true,
            |s| {
                let change_type = if s.length_ratio >= 1.0 {
                    SemanticChangeType::Expansion
                } else {
                    SemanticChangeType::Contraction
                };
                (change_type, 0.5)
            },
        ),
    ]
}

/// Classify one edit from its texts and embeddings.
///
/// `magnitude` overrides the embedding distance when the caller already has
/// a semantic diff for the edit. Deterministic: identical inputs always give
/// identical output.
pub fn classify_change(
    old_text: &str,
    new_text: &str,
    old_embedding: &[f32],
    new_embedding: &[f32],
    magnitude: Option<f64>,
) -> SemanticChangeDetail {
    // Opposed embeddings count as fully unrelated, not beyond.
    let distance = cosine_distance(old_embedding, new_embedding).clamp(0.0, 1.0);
    let overlap = vocabulary_overlap(old_text, new_text);
    let structure = structural_similarity(old_text, new_text);

    let signals = ChangeSignals {
        magnitude: magnitude
            .filter(|m| m.is_finite())
            .map(|m| m.clamp(0.0, 1.0))
            .unwrap_or(distance),
        topic_shift: (TOPIC_SHIFT_EMBEDDING_WEIGHT * distance
            + TOPIC_SHIFT_VOCABULARY_WEIGHT * (1.0 - overlap))
            .min(1.0),
        length_ratio: length_ratio(old_text, new_text),
        vocabulary_overlap: overlap,
        structural_similarity: structure,
    };

    let (rule, (change_type, confidence)) = first_match(&change_rules(), &signals)
        .unwrap_or(("uncertain", (SemanticChangeType::Expansion, 0.5)));
    debug!(rule, magnitude = signals.magnitude, topic_shift = signals.topic_shift, "edit classified");

    SemanticChangeDetail {
        change_type,
        confidence: round_to(confidence.clamp(0.0, 1.0), CHANGE_DECIMALS),
        magnitude: round_to(signals.magnitude, CHANGE_DECIMALS),
        direction: Some(direction(old_embedding, new_embedding)),
        metrics: ChangeMetrics {
            content_length_ratio: round_to(signals.length_ratio, CHANGE_DECIMALS),
            topic_shift: round_to(signals.topic_shift, CHANGE_DECIMALS),
            vocabulary_overlap: round_to(signals.vocabulary_overlap, CHANGE_DECIMALS),
            structural_similarity: round_to(signals.structural_similarity, CHANGE_DECIMALS),
        },
    }
}

/// New length over old length in characters. An empty old text divides by
/// one; empty to empty is 1.0.
fn length_ratio(old_text: &str, new_text: &str) -> f64 {
    let old_len = old_text.chars().count();
    let new_len = new_text.chars().count();
    match (old_len, new_len) {
        (0, 0) => 1.0,
        (0, n) => n as f64,
        (o, n) => n as f64 / o as f64,
    }
}

/// L2-normalized `new - old`. Mismatched lengths or a zero difference give
/// a zero vector.
fn direction(old_embedding: &[f32], new_embedding: &[f32]) -> Vec<f32> {
    if old_embedding.len() != new_embedding.len() {
        return vec![0.0; new_embedding.len()];
    }
    let diff: Vec<f64> = old_embedding
        .iter()
        .zip(new_embedding)
        .map(|(&o, &n)| n as f64 - o as f64)
        .collect();
    let norm = diff.iter().map(|d| d * d).sum::<f64>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return diff.into_iter().map(|d| d as f32).collect();
    }
    diff.into_iter().map(|d| (d / norm) as f32).collect()
}

/// Classifier bound to an embedding provider, for hosts that hold texts but
/// not embeddings.
pub struct SemanticChangeClassifier {
    provider: Arc<dyn IEmbeddingProvider>,
}

impl SemanticChangeClassifier {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Embed both texts through the provider, then classify.
    pub fn classify(
        &self,
        old_text: &str,
        new_text: &str,
        magnitude: Option<f64>,
    ) -> DriftLensResult<SemanticChangeDetail> {
        if !self.provider.is_available() {
            return Err(EmbeddingError::Unavailable {
                provider: self.provider.name().to_string(),
            }
            .into());
        }

        let mut embeddings = self
            .provider
            .embed_batch(&[old_text.to_string(), new_text.to_string()])?;
        if embeddings.len() != 2 {
            return Err(EmbeddingError::Failed {
                reason: format!("expected 2 embeddings, got {}", embeddings.len()),
            }
            .into());
        }
        let expected = self.provider.dimensions();
        for embedding in &embeddings {
            if embedding.len() != expected {
                return Err(EmbeddingError::DimensionMismatch {
                    expected,
                    actual: embedding.len(),
                }
                .into());
            }
        }

        let new_embedding = embeddings.pop().unwrap_or_default();
        let old_embedding = embeddings.pop().unwrap_or_default();
        Ok(classify_change(
            old_text,
            new_text,
            &old_embedding,
            &new_embedding,
            magnitude,
        ))
    }
}
