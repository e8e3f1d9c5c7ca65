use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::prize::{PrizeList, DEFAULT_PRIZES};
use crate::spin::{
    EarlyStopPolicy, SpinSettings, MAX_SPINS, MIN_SPINS, SPIN_DURATION_MS, STOP_DURATION_MS,
    STOP_SPINS,
};

pub const MAX_WHEEL_PX: u32 = 500;
pub const RESULT_DELAY_MS: u32 = 500;

/// Page-supplied wheel configuration. Every field falls back to the stock wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_wheel_config"))]
pub struct WheelConfig {
    #[validate(length(min = 1))]
    pub prizes: Vec<String>,
    pub sentinel: Option<usize>,
    #[validate(range(min = 1))]
    pub spin_duration_ms: u32,
    #[validate(range(min = 1))]
    pub stop_duration_ms: u32,
    #[validate(range(min = 1))]
    pub min_turns: u32,
    pub max_turns: u32,
    pub stop_turns: u32,
    pub early_stop: EarlyStopPolicy,
    pub sound_enabled: bool,
    #[validate(range(min = 100, max = 2000))]
    pub max_wheel_px: u32,
    pub result_delay_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            prizes: DEFAULT_PRIZES.iter().map(|label| label.to_string()).collect(),
            sentinel: None,
            spin_duration_ms: SPIN_DURATION_MS,
            stop_duration_ms: STOP_DURATION_MS,
            min_turns: MIN_SPINS,
            max_turns: MAX_SPINS,
            stop_turns: STOP_SPINS,
            early_stop: EarlyStopPolicy::default(),
            sound_enabled: true,
            max_wheel_px: MAX_WHEEL_PX,
            result_delay_ms: RESULT_DELAY_MS,
        }
    }
}

fn validate_wheel_config(config: &WheelConfig) -> Result<(), ValidationError> {
    if config.max_turns <= config.min_turns {
        let mut err = ValidationError::new("turn_range");
        err.message = Some(Cow::from("max_turns must be greater than min_turns"));
        return Err(err);
    }
    if let Some(sentinel) = config.sentinel {
        if sentinel >= config.prizes.len() {
            let mut err = ValidationError::new("sentinel_out_of_range");
            err.message = Some(Cow::from("sentinel must index into prizes"));
            return Err(err);
        }
    }
    Ok(())
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(ValidationErrors),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "wheel config is not valid JSON: {}", err),
            ConfigError::Invalid(err) => write!(f, "wheel config rejected: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<ValidationErrors> for ConfigError {
    fn from(err: ValidationErrors) -> Self {
        ConfigError::Invalid(err)
    }
}

impl WheelConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn spin_settings(&self) -> SpinSettings {
        SpinSettings {
            spin_duration_ms: self.spin_duration_ms,
            stop_duration_ms: self.stop_duration_ms,
            min_turns: self.min_turns,
            max_turns: self.max_turns,
            stop_turns: self.stop_turns,
            early_stop: self.early_stop,
        }
    }

    pub fn prize_list(&self) -> Result<PrizeList, ValidationError> {
        PrizeList::new(self.prizes.iter().cloned(), self.sentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_stock_wheel() {
        let config = WheelConfig::from_json("{}").unwrap();
        assert_eq!(config, WheelConfig::default());
        assert_eq!(config.spin_settings(), SpinSettings::default());
        assert_eq!(config.prize_list().unwrap(), PrizeList::default());
    }

    #[test]
    fn test_partial_override() {
        let config = WheelConfig::from_json(
            r#"{"prizes": ["tea", "wine", "nothing"], "early_stop": "keep_selection", "sound_enabled": false}"#,
        )
        .unwrap();
        assert_eq!(config.spin_duration_ms, SPIN_DURATION_MS);
        assert_eq!(config.spin_settings().early_stop, EarlyStopPolicy::KeepSelection);
        let prizes = config.prize_list().unwrap();
        assert_eq!(prizes.len(), 3);
        assert_eq!(prizes.sentinel(), 2);
        assert!(!config.sound_enabled);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            WheelConfig::from_json("{prizes: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_values() {
        for raw in [
            r#"{"prizes": []}"#,
            r#"{"spin_duration_ms": 0}"#,
            r#"{"min_turns": 6, "max_turns": 6}"#,
            r#"{"prizes": ["a", "b"], "sentinel": 2}"#,
            r#"{"max_wheel_px": 20}"#,
        ] {
            let err = WheelConfig::from_json(raw).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{}", raw);
            assert!(err.to_string().starts_with("wheel config rejected"));
        }
    }
}
