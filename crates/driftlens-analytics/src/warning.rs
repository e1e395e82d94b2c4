//! WarningDetector: flags today's EMA against the window's mean ± σ.
//!
//! Tiers, first match wins:
//! - `> mean + 2σ`   overheat / high
//! - `> mean + 1.5σ` overheat / mid
//! - `< mean - 2σ`   stagnation / high
//! - `< mean - 1.5σ` stagnation / mid
//! - `< mean - 1σ`   stagnation / low
//! - otherwise       stable / none

use driftlens_core::constants::{
    MIN_POINTS_FOR_WARNING, OVERHEAT_HIGH_SIGMA, OVERHEAT_SIGMA, STAGNATION_HIGH_SIGMA,
    STAGNATION_MID_SIGMA, STAGNATION_SIGMA,
};
use driftlens_core::models::{DailyDrift, DriftWarning, WarningSeverity, WarningState};
use tracing::debug;

use crate::numeric::mean_std;
use crate::rules::{first_match, Rule};

pub const STABLE_RECOMMENDATION: &str =
    "Your thinking is moving at a steady pace. Keep your current rhythm.";
pub const OVERHEAT_RECOMMENDATION: &str =
    "Your notes are changing much faster than usual. Step back and let recent ideas settle before adding more.";
pub const STAGNATION_RECOMMENDATION: &str =
    "Your notes have barely moved lately. Revisit an old note or pick up a new topic to restart the flow.";
pub const INSUFFICIENT_DATA_RECOMMENDATION: &str =
    "Not enough history yet. Keep writing for a few more days to unlock drift warnings.";

/// Today's EMA positioned against the window statistics.
#[derive(Debug, Clone, Copy)]
struct EmaPosition {
    today: f64,
    mean: f64,
    std_dev: f64,
}

type Tier = (WarningState, WarningSeverity);
type WarningRule = Rule<EmaPosition, Tier>;

fn warning_rules() -> [WarningRule; 6] {
    [
        WarningRule::new(
            "overheat_high",
            |p| p.today > p.mean + OVERHEAT_HIGH_SIGMA * p.std_dev,
            |_| (WarningState::Overheat, WarningSeverity::High),
        ),
        WarningRule::new(
            "overheat_mid",
            |p| p.today > p.mean + OVERHEAT_SIGMA * p.std_dev,
            |_| (WarningState::Overheat, WarningSeverity::Mid),
        ),
        WarningRule::new(
            "stagnation_high",
            |p| p.today < p.mean - STAGNATION_HIGH_SIGMA * p.std_dev,
            |_| (WarningState::Stagnation, WarningSeverity::High),
        ),
        WarningRule::new(
            "stagnation_mid",
            |p| p.today < p.mean - STAGNATION_MID_SIGMA * p.std_dev,
            |_| (WarningState::Stagnation, WarningSeverity::Mid),
        ),
        WarningRule::new(
            "stagnation_low",
            |p| p.today < p.mean - STAGNATION_SIGMA * p.std_dev,
            |_| (WarningState::Stagnation, WarningSeverity::Low),
        ),
        WarningRule::new(
            "stable",
            |_| true,
            |_| (WarningState::Stable, WarningSeverity::None),
        ),
    ]
}

/// Detect over-activity or stagnation in the latest EMA value.
///
/// Needs at least three points; shorter series are stable with the
/// insufficient-data recommendation.
pub fn detect_warning(series: &[DailyDrift]) -> DriftWarning {
    if series.len() < MIN_POINTS_FOR_WARNING {
        return DriftWarning {
            state: WarningState::Stable,
            severity: WarningSeverity::None,
            recommendation: INSUFFICIENT_DATA_RECOMMENDATION.to_string(),
        };
    }

    let emas: Vec<f64> = series.iter().map(|d| d.ema).collect();
    let (mean, std_dev) = mean_std(&emas).unwrap_or((0.0, 0.0));
    let position = EmaPosition {
        today: emas[emas.len() - 1],
        mean,
        std_dev,
    };

    let (rule, (state, severity)) = first_match(&warning_rules(), &position)
        .unwrap_or(("stable", (WarningState::Stable, WarningSeverity::None)));
    debug!(rule, today = position.today, mean, std_dev, "drift warning evaluated");

    DriftWarning {
        state,
        severity,
        recommendation: recommendation_for(state).to_string(),
    }
}

/// The fixed advisory sentence for a warning state.
pub fn recommendation_for(state: WarningState) -> &'static str {
    match state {
        WarningState::Stable => STABLE_RECOMMENDATION,
        WarningState::Overheat => OVERHEAT_RECOMMENDATION,
        WarningState::Stagnation => STAGNATION_RECOMMENDATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(today: f64) -> EmaPosition {
        EmaPosition {
            today,
            mean: 1.0,
            std_dev: 0.2,
        }
    }

    fn tier(today: f64) -> Tier {
        first_match(&warning_rules(), &position(today)).unwrap().1
    }

    #[test]
    fn high_tier_is_checked_before_mid() {
        assert_eq!(tier(1.5), (WarningState::Overheat, WarningSeverity::High));
        assert_eq!(tier(1.35), (WarningState::Overheat, WarningSeverity::Mid));
    }

    #[test]
    fn overheat_never_reports_low() {
        // Between mean + 1σ and mean + 1.5σ is still stable.
        assert_eq!(tier(1.25), (WarningState::Stable, WarningSeverity::None));
    }

    #[test]
    fn stagnation_has_three_tiers() {
        assert_eq!(tier(0.5), (WarningState::Stagnation, WarningSeverity::High));
        assert_eq!(tier(0.65), (WarningState::Stagnation, WarningSeverity::Mid));
        assert_eq!(tier(0.75), (WarningState::Stagnation, WarningSeverity::Low));
        assert_eq!(tier(0.9), (WarningState::Stable, WarningSeverity::None));
    }

    #[test]
    fn zero_sigma_is_stable() {
        let p = EmaPosition {
            today: 1.0,
            mean: 1.0,
            std_dev: 0.0,
        };
        let (_, t) = first_match(&warning_rules(), &p).unwrap();
        assert_eq!(t, (WarningState::Stable, WarningSeverity::None));
    }

    #[test]
    fn each_state_has_its_own_sentence() {
        let sentences = [
            recommendation_for(WarningState::Stable),
            recommendation_for(WarningState::Overheat),
            recommendation_for(WarningState::Stagnation),
            INSUFFICIENT_DATA_RECOMMENDATION,
        ];
        for (i, a) in sentences.iter().enumerate() {
            for b in &sentences[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
