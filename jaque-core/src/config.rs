//! Page configuration: the DOM contract, timings and reveal settings.
//!
//! Every field has a default matching the site's markup, so an empty JSON object is a valid
//! configuration and pages only need to override what differs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    FEEDBACK_HIDE_DELAY_MS, PANEL_CLOSE_DELAY_MS, PANEL_ENTRANCE_DELAY_MS, STORAGE_KEY,
};
use crate::motion::RevealSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub menu_toggle: String,
    pub options_panel: String,
    pub increase_font: String,
    pub decrease_font: String,
    pub toggle_contrast: String,
    pub reset: String,
    pub contact_form: String,
    pub thank_you: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            menu_toggle: "botao-acessibilidade".to_string(),
            options_panel: "opcoes-acessibilidade".to_string(),
            increase_font: "aumentar-fonte".to_string(),
            decrease_font: "diminuir-fonte".to_string(),
            toggle_contrast: "alterna-contraste".to_string(),
            reset: "reset-acessibilidade".to_string(),
            contact_form: "form-contato".to_string(),
            thank_you: "thank-you".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateClasses {
    pub panel_visible: String,
    pub high_contrast: String,
    pub hidden: String,
}

impl Default for StateClasses {
    fn default() -> Self {
        Self {
            panel_visible: "apresenta-lista".to_string(),
            high_contrast: "alto-contraste".to_string(),
            hidden: "d-none".to_string(),
        }
    }
}

/// Delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub panel_entrance_ms: u32,
    pub panel_close_ms: u32,
    pub feedback_hide_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            panel_entrance_ms: PANEL_ENTRANCE_DELAY_MS,
            panel_close_ms: PANEL_CLOSE_DELAY_MS,
            feedback_hide_ms: FEEDBACK_HIDE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub ids: ElementIds,
    pub classes: StateClasses,
    pub storage_key: String,
    pub timings: Timings,
    pub reveal: RevealSettings,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: StateClasses::default(),
            storage_key: STORAGE_KEY.to_string(),
            timings: Timings::default(),
            reveal: RevealSettings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    ZeroDelay { field: &'static str },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

impl PageConfig {
    /// Parse and validate a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails [`PageConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the controllers cannot work with.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero close or feedback delay, an empty storage key, or an empty
    /// state class name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timings.panel_close_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                field: "timings.panel_close_ms",
            });
        }
        if self.timings.feedback_hide_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                field: "timings.feedback_hide_ms",
            });
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::Empty {
                field: "storage_key",
            });
        }
        for (field, value) in [
            ("classes.panel_visible", &self.classes.panel_visible),
            ("classes.high_contrast", &self.classes.high_contrast),
            ("classes.hidden", &self.classes.hidden),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        Ok(())
    }
}
