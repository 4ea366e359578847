//! Accessibility panel visibility state machine.
//!
//! `expanded` is the single source of truth: both `aria-expanded` on the toggle and the
//! panel-visible class are derived from it in [`PanelView`], so they cannot disagree.

use crate::constants::{ESCAPE_KEY, PANEL_CLOSE_DELAY_MS, PANEL_ENTRANCE_DELAY_MS};
use crate::schedule::{TaskSlot, TaskTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// Hidden from layout.
    Closed,
    /// Open and displayed, entrance animation waiting for its tick.
    Opening,
    /// Open with the entrance animation applied.
    Open,
    /// Exit animation running, removal from layout pending.
    Closing,
}

impl PanelPhase {
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Where a document click landed relative to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    Toggle,
    InsidePanel,
    Outside,
}

impl ClickOrigin {
    /// The toggle wins over the panel so its own click never counts as a dismissal.
    #[must_use]
    pub const fn classify(on_toggle: bool, in_panel: bool) -> Self {
        if on_toggle {
            Self::Toggle
        } else if in_panel {
            Self::InsidePanel
        } else {
            Self::Outside
        }
    }
}

/// Presentation derived from a [`PanelPhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    pub expanded: bool,
    pub displayed: bool,
    pub entered: bool,
}

impl PanelView {
    #[must_use]
    pub const fn for_phase(phase: PanelPhase) -> Self {
        match phase {
            PanelPhase::Closed => Self {
                expanded: false,
                displayed: false,
                entered: false,
            },
            PanelPhase::Opening => Self {
                expanded: true,
                displayed: true,
                entered: false,
            },
            PanelPhase::Open => Self {
                expanded: true,
                displayed: true,
                entered: true,
            },
            PanelPhase::Closing => Self {
                expanded: false,
                displayed: true,
                entered: false,
            },
        }
    }

    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.displayed { "block" } else { "none" }
    }

    #[must_use]
    pub const fn opacity(&self) -> &'static str {
        if self.entered { "1" } else { "0" }
    }

    #[must_use]
    pub const fn transform(&self) -> &'static str {
        if self.entered {
            "translateY(0)"
        } else {
            "translateY(-10px)"
        }
    }
}

/// Result of a transition: what to render now and which continuation to schedule.
///
/// A scheduled continuation replaces any pending one for the same panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTransition {
    pub view: PanelView,
    pub schedule: Option<(TaskTicket, u32)>,
}

#[derive(Debug, Clone)]
pub struct PanelMachine {
    phase: PanelPhase,
    pending: TaskSlot,
    entrance_delay_ms: u32,
    close_delay_ms: u32,
}

impl Default for PanelMachine {
    fn default() -> Self {
        Self::new(PANEL_ENTRANCE_DELAY_MS, PANEL_CLOSE_DELAY_MS)
    }
}

impl PanelMachine {
    #[must_use]
    pub const fn new(entrance_delay_ms: u32, close_delay_ms: u32) -> Self {
        Self {
            phase: PanelPhase::Closed,
            pending: TaskSlot::new(),
            entrance_delay_ms,
            close_delay_ms,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> PanelPhase {
        self.phase
    }

    #[must_use]
    pub const fn view(&self) -> PanelView {
        PanelView::for_phase(self.phase)
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.phase.is_expanded()
    }

    /// Toggle control activated. Re-opening while `Closing` cancels the pending hide.
    pub fn toggle(&mut self) -> PanelTransition {
        if self.is_expanded() {
            self.close()
        } else {
            self.open()
        }
    }

    /// Click anywhere in the document. Only genuine outside clicks close an expanded panel.
    pub fn on_document_click(&mut self, origin: ClickOrigin) -> Option<PanelTransition> {
        match origin {
            ClickOrigin::Outside => self.dismiss(),
            ClickOrigin::Toggle | ClickOrigin::InsidePanel => None,
        }
    }

    pub fn on_key(&mut self, key: &str) -> Option<PanelTransition> {
        if key == ESCAPE_KEY {
            self.dismiss()
        } else {
            None
        }
    }

    /// Close the panel if it is expanded.
    pub fn dismiss(&mut self) -> Option<PanelTransition> {
        self.is_expanded().then(|| self.close())
    }

    /// A scheduled continuation fired. Stale tickets yield `None` and change nothing.
    pub fn on_timer(&mut self, ticket: TaskTicket) -> Option<PanelView> {
        if !self.pending.fire(ticket) {
            return None;
        }
        self.phase = match self.phase {
            PanelPhase::Opening => PanelPhase::Open,
            PanelPhase::Closing => PanelPhase::Closed,
            settled => settled,
        };
        Some(self.view())
    }

    fn open(&mut self) -> PanelTransition {
        self.phase = PanelPhase::Opening;
        let ticket = self.pending.arm();
        PanelTransition {
            view: self.view(),
            schedule: Some((ticket, self.entrance_delay_ms)),
        }
    }

    fn close(&mut self) -> PanelTransition {
        self.phase = PanelPhase::Closing;
        let ticket = self.pending.arm();
        PanelTransition {
            view: self.view(),
            schedule: Some((ticket, self.close_delay_ms)),
        }
    }
}
