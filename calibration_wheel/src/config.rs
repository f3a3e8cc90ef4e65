//! The wheel's configuration surface as a TOML document.
//!
//! ```toml
//! max_range     = 1000.0
//! min_range     = 100.0
//! turns         = 5.0
//! left_edge     = 0.0
//! right_edge    = 900.0
//! minimum       = 150.0
//! maximum       = 750.0
//! drive_level   = 400.0
//! drive_visible = true
//! ```
//!
//! Every key is optional.  Values are not range-checked here: the model
//! clamps them exactly as it clamps the equivalent setter calls.  Only
//! non-finite numbers are rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{RangeModel, DEFAULT_MAX_RANGE, DEFAULT_MIN_RANGE_FRACTION, DEFAULT_TURNS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("invalid wheel config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialise wheel config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("`{field}` must be a finite number")]
    NonFinite { field: &'static str },
}

/// Startup values for one wheel.
///
/// Unset optional values follow the model defaults: `min_range` is 10 % of
/// `max_range`, `right_edge` and `maximum` are the outer range, `minimum` is
/// the left edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WheelConfig {
    pub max_range:     f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_range:     Option<f64>,
    pub turns:         f64,
    pub left_edge:     f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_edge:    Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum:       Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum:       Option<f64>,
    pub drive_level:   f64,
    pub drive_visible: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        WheelConfig {
            max_range:     DEFAULT_MAX_RANGE,
            min_range:     None,
            turns:         DEFAULT_TURNS,
            left_edge:     0.0,
            right_edge:    None,
            minimum:       None,
            maximum:       None,
            drive_level:   0.0,
            drive_visible: false,
        }
    }
}

impl WheelConfig {
    /// Capture the current state of `model` as a fully specified config.
    pub fn from_model(model: &RangeModel) -> Self {
        WheelConfig {
            max_range:     model.max_range(),
            min_range:     Some(model.min_range()),
            turns:         model.turns(),
            left_edge:     model.left_edge(),
            right_edge:    Some(model.right_edge()),
            minimum:       Some(model.minimum()),
            maximum:       Some(model.maximum()),
            drive_level:   model.drive_level(),
            drive_visible: model.is_drive_visible(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded wheel config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject NaN and infinities; everything else is left to the model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_range",   Some(self.max_range)),
            ("min_range",   self.min_range),
            ("turns",       Some(self.turns)),
            ("left_edge",   Some(self.left_edge)),
            ("right_edge",  self.right_edge),
            ("minimum",     self.minimum),
            ("maximum",     self.maximum),
            ("drive_level", Some(self.drive_level)),
        ];
        for (field, value) in fields {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ConfigError::NonFinite { field });
            }
        }
        Ok(())
    }

    /// A fresh model with this configuration applied.
    pub fn build_model(&self) -> RangeModel {
        let mut model = RangeModel::new(self.max_range);
        self.apply_to(&mut model);
        model
    }

    /// Push every value through the model's setters.
    ///
    /// The outer edges are collapsed first so that a smaller `max_range` is
    /// accepted; the remaining values are then set outermost first.
    pub fn apply_to(&self, model: &mut RangeModel) {
        model.set_left_edge(0.0);
        model.set_right_edge(0.0);
        model.set_max_range(self.max_range);
        model.set_min_range(
            self.min_range.unwrap_or(self.max_range * DEFAULT_MIN_RANGE_FRACTION),
        );
        model.set_turns(self.turns);
        model.set_right_edge(self.right_edge.unwrap_or(self.max_range));
        model.set_left_edge(self.left_edge);
        model.set_maximum(self.maximum.unwrap_or(model.right_edge()));
        model.set_minimum(self.minimum.unwrap_or(model.left_edge()));
        model.set_drive_visible(self.drive_visible);
        model.set_drive_level(self.drive_level);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
