//! Accessibility preferences and their persistence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{FONT_SCALE_DEFAULT, FONT_SCALE_MAX, FONT_SCALE_MIN, STORAGE_KEY};
use crate::font::FontControls;
use crate::storage::KeyValueStore;

/// Persisted accessibility settings
///
/// Serialized as `{ "fontScale": n, "highContrast": b }`. Records written by the page's
/// earlier script used `fonte`/`contraste`; those names are still accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPreferences {
    #[serde(alias = "fonte")]
    pub font_scale: f64,
    #[serde(alias = "contraste")]
    pub high_contrast: bool,
}

impl Default for AccessibilityPreferences {
    fn default() -> Self {
        Self {
            font_scale: FONT_SCALE_DEFAULT,
            high_contrast: false,
        }
    }
}

impl AccessibilityPreferences {
    /// Parse a persisted record, treating anything unusable as absent.
    ///
    /// Non-finite scales are rejected; finite scales outside the allowed range are clamped.
    #[must_use]
    pub fn from_json(json: &str) -> Option<Self> {
        let prefs: Self = match serde_json::from_str(json) {
            Ok(prefs) => prefs,
            Err(err) => {
                log::debug!("ignoring malformed accessibility preferences: {err}");
                return None;
            }
        };
        if !prefs.font_scale.is_finite() {
            log::debug!("ignoring non-finite font scale {}", prefs.font_scale);
            return None;
        }
        Some(prefs.clamped())
    }

    /// Serialize to the persisted record shape.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (never for finite values).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Copy with the font scale forced into `[FONT_SCALE_MIN, FONT_SCALE_MAX]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            font_scale: clamp_scale(self.font_scale),
            ..self
        }
    }

    /// Inline `font-size` value, or `None` when the default size applies and the override
    /// should be cleared.
    #[must_use]
    pub fn font_size_css(&self) -> Option<String> {
        if (self.font_scale - FONT_SCALE_DEFAULT).abs() < f64::EPSILON {
            None
        } else {
            Some(format!("{}rem", self.font_scale))
        }
    }

    /// Enablement of the increase/decrease controls for the current scale.
    #[must_use]
    pub fn font_controls(&self) -> FontControls {
        FontControls::for_scale(self.font_scale)
    }

    /// `aria-pressed` value for the contrast toggle.
    #[must_use]
    pub const fn contrast_pressed(&self) -> &'static str {
        if self.high_contrast { "true" } else { "false" }
    }
}

/// Clamp a font multiplier to the accepted range.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX)
}

#[derive(Debug, Error)]
pub enum PrefsError<E: std::error::Error + 'static> {
    #[error("Storage error: {0}")]
    Storage(#[source] E),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Owner of the in-memory preferences and their storage record
///
/// Constructed once at startup and shared with the controllers that need it; nothing else
/// touches the storage key.
#[derive(Debug)]
pub struct PreferenceStore<S: KeyValueStore> {
    storage: S,
    key: String,
    prefs: AccessibilityPreferences,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Create a store with default preferences under the default key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
            prefs: AccessibilityPreferences::default(),
        }
    }

    #[must_use]
    pub const fn prefs(&self) -> AccessibilityPreferences {
        self.prefs
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted record without touching the in-memory value.
    ///
    /// Storage failures, missing records and malformed records all read as `None`.
    #[must_use]
    pub fn load(&self) -> Option<AccessibilityPreferences> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                log::debug!("preference storage unreadable: {err}");
                return None;
            }
        };
        AccessibilityPreferences::from_json(&raw)
    }

    /// Replace the in-memory preferences with the persisted ones when present.
    ///
    /// Returns whether a persisted record was found.
    pub fn restore(&mut self) -> bool {
        match self.load() {
            Some(prefs) => {
                self.prefs = prefs;
                true
            }
            None => false,
        }
    }

    /// Persist the full in-memory preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the storage rejects the write.
    pub fn save(&self) -> Result<(), PrefsError<S::Error>> {
        let json = self.prefs.to_json()?;
        self.storage
            .set_item(&self.key, &json)
            .map_err(PrefsError::Storage)
    }

    /// Mutate the preferences, clamp, then persist.
    ///
    /// The in-memory value is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the persistence error, if any.
    pub fn update<F>(&mut self, f: F) -> Result<AccessibilityPreferences, PrefsError<S::Error>>
    where
        F: FnOnce(&mut AccessibilityPreferences),
    {
        f(&mut self.prefs);
        self.prefs = self.prefs.clamped();
        self.save()?;
        Ok(self.prefs)
    }
}
