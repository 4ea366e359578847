//! Font scale and contrast actions.

use crate::constants::{FONT_SCALE_MAX, FONT_SCALE_MIN, FONT_SCALE_STEP};
use crate::prefs::{AccessibilityPreferences, clamp_scale};

/// One click on an accessibility control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontAction {
    Increase,
    Decrease,
    ToggleContrast,
    Reset,
}

impl FontAction {
    /// Apply the action in place. The stepped scale is snapped to the step grid, then clamped,
    /// so repeated clicks settle on the boundary and a walk back lands exactly on the default.
    pub fn apply(self, prefs: &mut AccessibilityPreferences) {
        match self {
            Self::Increase => prefs.font_scale = step_scale(prefs.font_scale, FONT_SCALE_STEP),
            Self::Decrease => prefs.font_scale = step_scale(prefs.font_scale, -FONT_SCALE_STEP),
            Self::ToggleContrast => prefs.high_contrast = !prefs.high_contrast,
            Self::Reset => *prefs = AccessibilityPreferences::default(),
        }
    }
}

fn step_scale(scale: f64, delta: f64) -> f64 {
    let steps_per_unit = FONT_SCALE_STEP.recip().round();
    clamp_scale(((scale + delta) * steps_per_unit).round() / steps_per_unit)
}

/// Disabled state of the increase and decrease controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontControls {
    pub increase_disabled: bool,
    pub decrease_disabled: bool,
}

impl FontControls {
    #[must_use]
    pub fn for_scale(scale: f64) -> Self {
        Self {
            increase_disabled: scale >= FONT_SCALE_MAX,
            decrease_disabled: scale <= FONT_SCALE_MIN,
        }
    }
}
