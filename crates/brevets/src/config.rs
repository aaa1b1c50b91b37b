//! Calculator configuration.

use serde::{Deserialize, Serialize};

use crate::{errors::BrevetError, rounding::MinuteRounding};

/// Environment variable selecting the minute rounding rule.
pub const MINUTE_ROUNDING_ENV: &str = "BREVET_MINUTE_ROUNDING";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// How offsets landing on a half minute are rounded.
    #[serde(default)]
    pub minute_rounding: MinuteRounding,
}

impl CalculatorConfig {
    pub fn from_json(json: &str) -> Result<Self, BrevetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads overrides from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, BrevetError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BrevetError> {
        let minute_rounding = match lookup(MINUTE_ROUNDING_ENV) {
            Some(value) => value.parse()?,
            None => MinuteRounding::default(),
        };
        Ok(Self { minute_rounding })
    }
}
