//! Ordered first-match rule lists.
//!
//! Warning tiers and the change-type cascade depend on evaluation order.
//! Encoding them as data keeps that order in one visible place.

/// A named `(predicate, outcome)` pair.
pub struct Rule<I, O> {
    pub name: &'static str,
    pub predicate: fn(&I) -> bool,
    pub outcome: fn(&I) -> O,
}

impl<I, O> Rule<I, O> {
    pub fn new(name: &'static str, predicate: fn(&I) -> bool, outcome: fn(&I) -> O) -> Self {
        Self {
            name,
            predicate,
            outcome,
        }
    }
}

/// Evaluate `rules` top to bottom and return the first matching outcome
/// together with the rule's name. Later rules are never evaluated.
pub fn first_match<I, O>(rules: &[Rule<I, O>], input: &I) -> Option<(&'static str, O)> {
    rules
        .iter()
        .find(|rule| (rule.predicate)(input))
        .map(|rule| (rule.name, (rule.outcome)(input)))
}
