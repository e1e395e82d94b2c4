//! SemanticChangeClassifier: what kind of change a single edit made.

mod classifier;
mod structure;
mod tokenize;

pub use classifier::{classify_change, SemanticChangeClassifier};
pub use structure::{extract_headings, paragraph_count, structural_similarity};
pub use tokenize::{token_set, vocabulary_overlap};
