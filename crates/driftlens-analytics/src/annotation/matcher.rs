use driftlens_core::models::{DriftLabel, DriftPhase, PhaseMatch};

/// Phases consistent with each label.
pub fn expected_phases(label: DriftLabel) -> &'static [DriftPhase] {
    match label {
        DriftLabel::Breakthrough => &[DriftPhase::Creation],
        DriftLabel::Exploration => &[DriftPhase::Creation, DriftPhase::Neutral],
        DriftLabel::Confusion => &[DriftPhase::Creation, DriftPhase::Destruction],
        DriftLabel::Organizing => &[DriftPhase::Destruction, DriftPhase::Neutral],
        DriftLabel::Stagnation => &[DriftPhase::Neutral],
        DriftLabel::Routine => &[DriftPhase::Neutral],
    }
}

/// Compare a label with the system phase for the same day.
pub fn match_phase(label: DriftLabel, auto_phase: Option<DriftPhase>) -> PhaseMatch {
    match auto_phase {
        None => PhaseMatch::Unknown,
        Some(phase) if expected_phases(label).contains(&phase) => PhaseMatch::Matched,
        Some(_) => PhaseMatch::Mismatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakthrough_expects_creation() {
        assert_eq!(
            match_phase(DriftLabel::Breakthrough, Some(DriftPhase::Creation)),
            PhaseMatch::Matched
        );
        assert_eq!(
            match_phase(DriftLabel::Breakthrough, Some(DriftPhase::Destruction)),
            PhaseMatch::Mismatched
        );
        assert_eq!(match_phase(DriftLabel::Breakthrough, None), PhaseMatch::Unknown);
    }

    #[test]
    fn every_label_expects_something() {
        for label in DriftLabel::ALL {
            assert!(!expected_phases(label).is_empty());
        }
    }

    #[test]
    fn confusion_accepts_both_directions() {
        assert_eq!(
            match_phase(DriftLabel::Confusion, Some(DriftPhase::Destruction)),
            PhaseMatch::Matched
        );
        assert_eq!(
            match_phase(DriftLabel::Confusion, Some(DriftPhase::Neutral)),
            PhaseMatch::Mismatched
        );
    }
}
