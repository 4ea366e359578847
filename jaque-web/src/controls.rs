//! Font scale, contrast and reset controls.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use jaque_core::{ElementIds, FontAction, PreferenceStore, StateClasses};
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use crate::a11y;
use crate::dom;
use crate::storage::WebStorage;

pub type SharedStore = Rc<RefCell<PreferenceStore<WebStorage>>>;

/// Applies [`FontAction`]s to the shared store and renders the result.
pub struct FontScaleController {
    store: SharedStore,
    body: HtmlElement,
    increase: Option<HtmlButtonElement>,
    decrease: Option<HtmlButtonElement>,
    contrast: Option<HtmlElement>,
    reset: Option<HtmlElement>,
    classes: StateClasses,
}

impl FontScaleController {
    #[must_use]
    pub fn new(
        doc: &Document,
        body: HtmlElement,
        store: SharedStore,
        ids: &ElementIds,
        classes: &StateClasses,
    ) -> Self {
        Self {
            store,
            body,
            increase: dom::optional_element(doc, &ids.increase_font),
            decrease: dom::optional_element(doc, &ids.decrease_font),
            contrast: dom::optional_element(doc, &ids.toggle_contrast),
            reset: dom::optional_element(doc, &ids.reset),
            classes: classes.clone(),
        }
    }

    /// Render document presentation and control state from the current preferences.
    pub fn render(&self) {
        let prefs = self.store.borrow().prefs();
        a11y::apply_to_document(&self.body, &prefs, &self.classes);
        a11y::render_font_controls(
            self.increase.as_ref(),
            self.decrease.as_ref(),
            prefs.font_controls(),
        );
        if let Some(contrast) = &self.contrast {
            a11y::set_pressed(contrast, prefs.contrast_pressed());
        }
    }

    /// Apply one action, persist it, and re-render.
    ///
    /// A failed write is logged; the page keeps showing the in-memory preferences.
    pub fn handle(&self, action: FontAction) {
        let result = self.store.borrow_mut().update(|prefs| action.apply(prefs));
        match result {
            Ok(prefs) => log::debug!("{action:?} -> {prefs:?}"),
            Err(err) => log::warn!("accessibility preferences not saved: {err}"),
        }
        self.render();
    }

    /// Register click handlers on whichever controls exist.
    #[must_use]
    pub fn wire(self: &Rc<Self>) -> Vec<EventListener> {
        let bindings: [(Option<&HtmlElement>, FontAction); 4] = [
            (self.increase.as_ref().map(|b| &**b), FontAction::Increase),
            (self.decrease.as_ref().map(|b| &**b), FontAction::Decrease),
            (self.contrast.as_ref(), FontAction::ToggleContrast),
            (self.reset.as_ref(), FontAction::Reset),
        ];
        let mut listeners = Vec::new();
        for (control, action) in bindings {
            let Some(control) = control else {
                continue;
            };
            let this = Rc::clone(self);
            listeners.push(EventListener::new(control, "click", move |_| {
                this.handle(action);
            }));
        }
        listeners
    }
}
