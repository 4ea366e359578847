//! Fixed limits and defaults shared by the controllers.

/// Smallest font multiplier the page accepts.
pub const FONT_SCALE_MIN: f64 = 0.8;
/// Largest font multiplier the page accepts.
pub const FONT_SCALE_MAX: f64 = 1.5;
/// Additive step for one increase or decrease click.
pub const FONT_SCALE_STEP: f64 = 0.1;
/// Multiplier used on first visit and after a reset.
pub const FONT_SCALE_DEFAULT: f64 = 1.0;

/// `localStorage` key holding the serialized preferences.
pub const STORAGE_KEY: &str = "configAcessibilidade";

/// Delay before the panel entrance animation starts, so the display change lands first.
pub const PANEL_ENTRANCE_DELAY_MS: u32 = 10;
/// Delay between starting the exit animation and removing the panel from layout.
pub const PANEL_CLOSE_DELAY_MS: u32 = 300;
/// How long the contact confirmation stays visible.
pub const FEEDBACK_HIDE_DELAY_MS: u32 = 5000;

/// Media query for the platform reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
/// Global name of the optional scroll-reveal library.
pub const SCROLL_REVEAL_GLOBAL: &str = "ScrollReveal";

/// Key that dismisses the open panel.
pub const ESCAPE_KEY: &str = "Escape";
