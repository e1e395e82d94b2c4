use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningState {
    Stable,
    /// Today's EMA is far above the recent mean.
    Overheat,
    /// Today's EMA is far below the recent mean.
    Stagnation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    None,
    Low,
    Mid,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftWarning {
    pub state: WarningState,
    pub severity: WarningSeverity,
    /// Fixed advisory sentence for `state`.
    pub recommendation: String,
}

impl DriftWarning {
    pub fn is_stable(&self) -> bool {
        self.state == WarningState::Stable
    }
}
