pub mod analytics_config;
pub mod annotation_config;
pub mod observability_config;
pub mod storage_config;

use serde::{Deserialize, Serialize};

pub use analytics_config::AnalyticsConfig;
pub use annotation_config::AnnotationConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use crate::errors::{DriftLensError, DriftLensResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DriftLensConfig {
    pub analytics: AnalyticsConfig,
    pub annotations: AnnotationConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl DriftLensConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Parse and validate in one step.
    pub fn load(toml_str: &str) -> DriftLensResult<Self> {
        let config =
            Self::from_toml(toml_str).map_err(|e| DriftLensError::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            window_days = config.analytics.window_days,
            stats_window_days = config.annotations.stats_window_days,
            "driftlens config loaded"
        );
        Ok(config)
    }

    /// Check cross-field bounds that serde defaults cannot express.
    pub fn validate(&self) -> DriftLensResult<()> {
        self.analytics.validate()?;
        self.annotations.validate()?;
        Ok(())
    }
}
