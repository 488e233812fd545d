//! Tunable settings for the classifier and the avatar controller.
//!
//! Defaults come from the constants in the crate root. A JSON file may
//! override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::EmotionLabel;
use crate::{AvatarError, Result};
use crate::{DEBOUNCE_MS, FAST_TYPING_MS, FOLLOW_OFFSET_X, FOLLOW_OFFSET_Y, PULSE_MS};

/// Classifier switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Scale keyword weights by smoothed inverse document frequency.
    pub idf_scaling: bool,
    /// Run the polarity bonus pass after keyword matching.
    pub sentiment_bonus: bool,
    /// Label returned when nothing scores above zero.
    pub default_label: EmotionLabel,
    /// Label the default is swapped for during rapid typing.
    pub fast_typing_label: EmotionLabel,
    /// Below this many milliseconds between classifications, typing counts as rapid.
    pub fast_typing_ms: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            idf_scaling: true,
            sentiment_bonus: true,
            default_label: EmotionLabel::Happy,
            fast_typing_label: EmotionLabel::Laughing,
            fast_typing_ms: FAST_TYPING_MS,
        }
    }
}

/// Full avatar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub classifier: ClassifierConfig,
    /// Quiet period before classifying a burst of input.
    pub debounce_ms: u64,
    /// Lifetime of the pulse/fade classes.
    pub pulse_ms: u64,
    /// Widget offset from the focused field's top-left corner.
    pub follow_offset_x: f64,
    pub follow_offset_y: f64,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            debounce_ms: DEBOUNCE_MS,
            pulse_ms: PULSE_MS,
            follow_offset_x: FOLLOW_OFFSET_X,
            follow_offset_y: FOLLOW_OFFSET_Y,
        }
    }
}

impl AvatarConfig {
    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AvatarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| AvatarError::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(AvatarError::InvalidConfig("debounce_ms must be > 0".into()));
        }
        if self.pulse_ms == 0 {
            return Err(AvatarError::InvalidConfig("pulse_ms must be > 0".into()));
        }
        if !self.follow_offset_x.is_finite() || !self.follow_offset_y.is_finite() {
            return Err(AvatarError::InvalidConfig("follow offsets must be finite".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_constants() {
        let config = AvatarConfig::default();
        assert_eq!(config.debounce_ms, 200);
        assert_eq!(config.pulse_ms, 500);
        assert_eq!(config.follow_offset_y, -80.0);
        assert_eq!(config.classifier.fast_typing_ms, 150);
        assert!(config.classifier.idf_scaling);
        assert!(config.classifier.sentiment_bonus);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AvatarConfig::from_json(r#"{"classifier": {"idf_scaling": false}, "debounce_ms": 300}"#).unwrap();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.pulse_ms, PULSE_MS);
        assert!(!config.classifier.idf_scaling);
        assert!(config.classifier.sentiment_bonus);
        assert_eq!(config.classifier.default_label, EmotionLabel::Happy);
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let err = AvatarConfig::from_json(r#"{"debounce_ms": 0}"#).unwrap_err();
        assert!(matches!(err, AvatarError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_pulse_rejected() {
        let err = AvatarConfig::from_json(r#"{"pulse_ms": 0}"#).unwrap_err();
        assert!(matches!(err, AvatarError::InvalidConfig(_)));
    }

    #[test]
    fn test_non_finite_offsets_rejected() {
        let config = AvatarConfig { follow_offset_y: f64::NAN, ..AvatarConfig::default() };
        assert!(matches!(config.validate(), Err(AvatarError::InvalidConfig(_))));

        let config = AvatarConfig { follow_offset_x: f64::INFINITY, ..AvatarConfig::default() };
        assert!(matches!(config.validate(), Err(AvatarError::InvalidConfig(_))));

        assert!(AvatarConfig::default().validate().is_ok());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = AvatarConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AvatarError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.json");
        std::fs::write(&path, r#"{"pulse_ms": 750}"#).unwrap();
        let config = AvatarConfig::load(&path).unwrap();
        assert_eq!(config.pulse_ms, 750);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AvatarConfig::load("/nonexistent/avatar.json").unwrap_err();
        assert!(matches!(err, AvatarError::Io { .. }));
    }
}
