//! ModeClassifier: (trend, warning) → behavioral mode and advice.

use driftlens_core::models::{DriftMode, DriftWarning, Trend, WarningState};

pub const EXPLORATION_ADVICE: &str =
    "A good time to explore: follow loose threads and capture new ideas without judging them yet.";
pub const CONSOLIDATION_ADVICE: &str =
    "A good time to consolidate: connect related notes, tidy structure, and summarize what you know.";
pub const GROWTH_ADVICE: &str =
    "Your thinking is growing: keep building on the ideas that are moving right now.";
pub const REST_ADVICE: &str =
    "Time to rest: pause heavy rewriting and give recent changes room to settle.";

/// Map trend and warning state to a mode. Warnings take priority.
pub fn classify_mode(trend: Trend, warning: WarningState) -> DriftMode {
    match (warning, trend) {
        (WarningState::Overheat, _) => DriftMode::Rest,
        (WarningState::Stagnation, _) => DriftMode::Exploration,
        (WarningState::Stable, Trend::Rising) => DriftMode::Growth,
        (WarningState::Stable, Trend::Falling | Trend::Flat) => DriftMode::Consolidation,
    }
}

/// Fixed advice sentence for a mode.
pub fn mode_advice(mode: DriftMode) -> &'static str {
    match mode {
        DriftMode::Exploration => EXPLORATION_ADVICE,
        DriftMode::Consolidation => CONSOLIDATION_ADVICE,
        DriftMode::Growth => GROWTH_ADVICE,
        DriftMode::Rest => REST_ADVICE,
    }
}

/// Advice shown to the user: the warning's recommendation verbatim when the
/// warning is not stable, otherwise the mode advice.
pub fn resolve_advice(mode: DriftMode, warning: &DriftWarning) -> String {
    if warning.is_stable() {
        mode_advice(mode).to_string()
    } else {
        warning.recommendation.clone()
    }
}

#[cfg(test)]
mod tests {
    use driftlens_core::models::WarningSeverity;

    use super::*;

    #[test]
    fn decision_table() {
        use DriftMode::*;
        let cases = [
            (Trend::Rising, WarningState::Overheat, Rest),
            (Trend::Flat, WarningState::Overheat, Rest),
            (Trend::Rising, WarningState::Stagnation, Exploration),
            (Trend::Falling, WarningState::Stagnation, Exploration),
            (Trend::Rising, WarningState::Stable, Growth),
            (Trend::Falling, WarningState::Stable, Consolidation),
            (Trend::Flat, WarningState::Stable, Consolidation),
        ];
        for (trend, warning, expected) in cases {
            assert_eq!(classify_mode(trend, warning), expected, "{trend:?}/{warning:?}");
        }
    }

    #[test]
    fn warning_recommendation_wins_when_not_stable() {
        let warning = DriftWarning {
            state: WarningState::Overheat,
            severity: WarningSeverity::High,
            recommendation: "slow down".to_string(),
        };
        assert_eq!(resolve_advice(DriftMode::Rest, &warning), "slow down");
    }

    #[test]
    fn mode_advice_when_stable() {
        let warning = DriftWarning {
            state: WarningState::Stable,
            severity: WarningSeverity::None,
            recommendation: "steady".to_string(),
        };
        assert_eq!(resolve_advice(DriftMode::Growth, &warning), GROWTH_ADVICE);
    }
}
