//! Top-level basket configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{FallbackMode, MiningConfig, RuleMetric, RulesConfig};
use crate::errors::ConfigError;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "basket.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (`ConfigOverrides`)
/// 2. Environment variables (`BASKET_*`)
/// 3. Project config (`basket.toml` in the project root)
/// 4. User config (`~/.basket/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BasketConfig {
    pub mining: MiningConfig,
    pub rules: RulesConfig,
}

/// Caller-supplied overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub min_support: Option<f64>,
    pub min_threshold: Option<f64>,
    pub metric: Option<RuleMetric>,
    pub max_len: Option<usize>,
    pub fallback: Option<FallbackMode>,
}

impl BasketConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only parse failures are fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Build a config directly from the two core thresholds.
    pub fn with_thresholds(min_support: f64, min_confidence: f64) -> Self {
        Self {
            mining: MiningConfig {
                min_support: Some(min_support),
                ..Default::default()
            },
            rules: RulesConfig {
                metric: Some(RuleMetric::Confidence),
                min_threshold: Some(min_confidence),
                ..Default::default()
            },
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &BasketConfig) -> Result<(), ConfigError> {
        let min_support = config.mining.effective_min_support();
        if !(min_support > 0.0 && min_support <= 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "mining.min_support".to_string(),
                message: "must be in (0.0, 1.0]".to_string(),
            });
        }
        if config.mining.max_len == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "mining.max_len".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let metric = config.rules.effective_metric();
        let threshold = config.rules.effective_min_threshold();
        if !metric.accepts_threshold(threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "rules.min_threshold".to_string(),
                message: format!("{} is out of range for metric '{}'", threshold, metric),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.basket/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".basket").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut BasketConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BasketConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut BasketConfig, other: &BasketConfig) {
        if other.mining.min_support.is_some() {
            base.mining.min_support = other.mining.min_support;
        }
        if other.mining.max_len.is_some() {
            base.mining.max_len = other.mining.max_len;
        }
        if other.rules.metric.is_some() {
            base.rules.metric = other.rules.metric;
        }
        if other.rules.min_threshold.is_some() {
            base.rules.min_threshold = other.rules.min_threshold;
        }
        if other.rules.fallback.is_some() {
            base.rules.fallback = other.rules.fallback;
        }
    }

    /// Apply `BASKET_*` environment variables.
    ///
    /// `BASKET_MIN_CONFIDENCE` predates metric selection and sets the rule
    /// threshold even when the metric is lift, leverage, or conviction;
    /// `BASKET_RULE_THRESHOLD` is the same setting under a neutral name.
    ///
    /// Numeric values that fail to parse are ignored; unknown enum names are
    /// rejected so a typo in `BASKET_RULE_METRIC` does not silently fall back.
    fn apply_env_overrides(config: &mut BasketConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("BASKET_MIN_SUPPORT") {
            if let Ok(v) = val.parse::<f64>() {
                config.mining.min_support = Some(v);
            }
        }
        // Both set `rules.min_threshold` for whichever metric is active; the
        // metric-neutral name wins when both are present.
        for key in ["BASKET_MIN_CONFIDENCE", "BASKET_RULE_THRESHOLD"] {
            if let Ok(val) = std::env::var(key) {
                if let Ok(v) = val.parse::<f64>() {
                    config.rules.min_threshold = Some(v);
                }
            }
        }
        if let Ok(val) = std::env::var("BASKET_MAX_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.mining.max_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_RULE_METRIC") {
            config.rules.metric = Some(val.parse()?);
        }
        if let Ok(val) = std::env::var("BASKET_FALLBACK") {
            config.rules.fallback = Some(val.parse()?);
        }
        Ok(())
    }

    fn apply_overrides(config: &mut BasketConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.min_support {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = overrides.max_len {
            config.mining.max_len = Some(v);
        }
        if let Some(v) = overrides.metric {
            config.rules.metric = Some(v);
        }
        if let Some(v) = overrides.min_threshold {
            config.rules.min_threshold = Some(v);
        }
        if let Some(v) = overrides.fallback {
            config.rules.fallback = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
