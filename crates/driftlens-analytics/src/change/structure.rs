//! Heading and paragraph shape of a note.

use std::collections::HashSet;

use driftlens_core::constants::{STRUCTURE_HEADING_WEIGHT, STRUCTURE_PARAGRAPH_WEIGHT};

use crate::numeric::jaccard;

/// Text of Markdown ATX headings (`#` to `######` followed by whitespace).
pub fn extract_headings(text: &str) -> HashSet<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            let hashes = trimmed.chars().take_while(|&c| c == '#').count();
            if hashes == 0 || hashes > 6 {
                return None;
            }
            let rest = &trimmed[hashes..];
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let title = rest.trim().trim_end_matches('#').trim();
            (!title.is_empty()).then(|| title.to_string())
        })
        .collect()
}

/// Number of non-empty runs of lines separated by blank lines.
pub fn paragraph_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            in_paragraph = true;
            count += 1;
        }
    }
    count
}

/// `0.6·Jaccard(headings) + 0.4·(min/max paragraph count)`.
pub fn structural_similarity(old_text: &str, new_text: &str) -> f64 {
    let heading_similarity = jaccard(&extract_headings(old_text), &extract_headings(new_text));

    let (a, b) = (paragraph_count(old_text), paragraph_count(new_text));
    let paragraph_ratio = match a.max(b) {
        0 => 1.0,
        max => a.min(b) as f64 / max as f64,
    };

    (STRUCTURE_HEADING_WEIGHT * heading_similarity + STRUCTURE_PARAGRAPH_WEIGHT * paragraph_ratio)
        .clamp(0.0, 1.0)
}
