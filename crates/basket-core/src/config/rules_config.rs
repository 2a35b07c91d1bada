//! Association rule configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MIN_CONFIDENCE;
use crate::errors::ConfigError;

/// Metric used to filter candidate rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleMetric {
    Support,
    #[default]
    Confidence,
    Lift,
    Leverage,
    Conviction,
}

impl RuleMetric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Confidence => "confidence",
            Self::Lift => "lift",
            Self::Leverage => "leverage",
            Self::Conviction => "conviction",
        }
    }

    /// Whether `threshold` is a meaningful cut-off for this metric.
    pub fn accepts_threshold(&self, threshold: f64) -> bool {
        if !threshold.is_finite() {
            return false;
        }
        match self {
            Self::Support | Self::Confidence => threshold > 0.0 && threshold <= 1.0,
            Self::Lift | Self::Conviction => threshold > 0.0,
            Self::Leverage => (-1.0..=1.0).contains(&threshold),
        }
    }
}

impl fmt::Display for RuleMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleMetric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "support" => Ok(Self::Support),
            "confidence" => Ok(Self::Confidence),
            "lift" => Ok(Self::Lift),
            "leverage" => Ok(Self::Leverage),
            "conviction" => Ok(Self::Conviction),
            other => Err(ConfigError::InvalidValue {
                field: "rules.metric".to_string(),
                message: format!("unknown rule metric '{}'", other),
            }),
        }
    }
}

/// What to emit when no rule clears the threshold but itemsets exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Emit up to three labelled placeholder rules built from the top itemsets.
    #[default]
    Demo,
    /// Return an empty rule list.
    Disabled,
}

impl FallbackMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FallbackMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "disabled" | "off" | "none" => Ok(Self::Disabled),
            other => Err(ConfigError::InvalidValue {
                field: "rules.fallback".to_string(),
                message: format!("unknown fallback mode '{}'", other),
            }),
        }
    }
}

/// Configuration for the rule generator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Filter metric. Default: confidence.
    pub metric: Option<RuleMetric>,
    /// Minimum value of `metric` for a rule to be kept. With the default
    /// metric this is the minimum confidence. Default: 0.4.
    pub min_threshold: Option<f64>,
    /// Fallback when no rule survives. Default: demo.
    pub fallback: Option<FallbackMode>,
}

impl RulesConfig {
    pub fn effective_metric(&self) -> RuleMetric {
        self.metric.unwrap_or_default()
    }

    pub fn effective_min_threshold(&self) -> f64 {
        self.min_threshold.unwrap_or(DEFAULT_MIN_CONFIDENCE)
    }

    pub fn effective_fallback(&self) -> FallbackMode {
        self.fallback.unwrap_or_default()
    }
}
