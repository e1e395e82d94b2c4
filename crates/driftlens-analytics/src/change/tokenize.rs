//! Language-agnostic tokenization.
//!
//! Tokens are contiguous runs of CJK ideographs or runs of two or more Latin
//! letters (lower-cased). Everything else separates tokens.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::numeric::jaccard;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\p{Han}+|[A-Za-z]{2,}").expect("token pattern is valid"))
}

/// Distinct tokens of `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    token_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Jaccard index of the two texts' token sets; 1.0 when both have none.
pub fn vocabulary_overlap(old_text: &str, new_text: &str) -> f64 {
    jaccard(&token_set(old_text), &token_set(new_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_runs_need_two_letters() {
        let tokens = token_set("A cat, a DOG and x-ray!");
        let expected: HashSet<String> = ["cat", "dog", "and", "ray"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn cjk_runs_are_single_tokens() {
        let tokens = token_set("思考の漂流 drift");
        assert!(tokens.contains("思考"));
        assert!(tokens.contains("漂流"));
        assert!(tokens.contains("drift"));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn digits_and_punctuation_separate() {
        assert!(token_set("123 -- !!").is_empty());
    }

    #[test]
    fn overlap_edges() {
        assert_eq!(vocabulary_overlap("", "1 2 3"), 1.0);
        assert_eq!(vocabulary_overlap("same words", "same words"), 1.0);
        assert_eq!(vocabulary_overlap("alpha", "beta"), 0.0);
    }
}
