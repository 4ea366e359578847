//! Reveal-on-scroll settings and the reduced-motion gate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealOrigin {
    Top,
    Bottom,
    Left,
    Right,
}

/// Options handed to the scroll-reveal constructor.
///
/// Configuration reads snake_case keys like the rest of the page config; serialization uses the
/// library's own field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub origin: RevealOrigin,
    pub distance: String,
    pub duration: u32,
    pub reset: bool,
    pub easing: String,
    #[serde(rename(serialize = "viewFactor"), alias = "viewFactor")]
    pub view_factor: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            origin: RevealOrigin::Top,
            distance: "30px".to_string(),
            duration: 700,
            reset: false,
            easing: "cubic-bezier(0.5, 0, 0, 1)".to_string(),
            view_factor: 0.1,
        }
    }
}

/// Sections revealed one after another, `interval` milliseconds apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSequence {
    pub selectors: Vec<String>,
    pub interval: u32,
}

impl Default for RevealSequence {
    fn default() -> Self {
        Self {
            selectors: ["#inicio", "#como-funciona", "#galeria", "#contato"]
                .into_iter()
                .map(String::from)
                .collect(),
            interval: 200,
        }
    }
}

impl RevealSequence {
    /// Single CSS selector list covering every section.
    #[must_use]
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub options: RevealOptions,
    pub sequence: RevealSequence,
}

/// Outcome of the startup motion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionDecision {
    Animate,
    /// The user asked the platform for reduced motion.
    ReducedMotion,
    /// The reveal library is not loaded on this page.
    Unavailable,
}

impl MotionDecision {
    /// Both conditions must hold to animate; reduced motion is reported first.
    #[must_use]
    pub const fn decide(reduced_motion: bool, library_available: bool) -> Self {
        if reduced_motion {
            Self::ReducedMotion
        } else if !library_available {
            Self::Unavailable
        } else {
            Self::Animate
        }
    }

    #[must_use]
    pub const fn should_animate(self) -> bool {
        matches!(self, Self::Animate)
    }
}
