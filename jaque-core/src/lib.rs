//! Jaque page core
//!
//! Platform-agnostic accessibility preference and page behaviour logic for the Jaque site.
//! This crate holds every state transition without touching the DOM; the web crate renders
//! what these types decide.

pub mod config;
pub mod constants;
pub mod feedback;
pub mod font;
pub mod motion;
pub mod panel;
pub mod prefs;
pub mod schedule;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigError, ElementIds, PageConfig, StateClasses, Timings};
pub use feedback::{FeedbackMachine, FeedbackView};
pub use font::{FontAction, FontControls};
pub use motion::{MotionDecision, RevealOptions, RevealOrigin, RevealSequence, RevealSettings};
pub use panel::{ClickOrigin, PanelMachine, PanelPhase, PanelTransition, PanelView};
pub use prefs::{AccessibilityPreferences, PreferenceStore, PrefsError};
pub use schedule::{TaskSlot, TaskTicket};
pub use storage::{KeyValueStore, MemoryStore};
