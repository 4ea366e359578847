//! Page-ready wiring of every controller.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use jaque_core::{AccessibilityPreferences, MotionDecision, PageConfig, PreferenceStore};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use crate::controls::{FontScaleController, SharedStore};
use crate::dom::{self, PageError};
use crate::feedback::FeedbackController;
use crate::panel::PanelController;
use crate::reveal::{self, RevealHandle};
use crate::storage::WebStorage;

/// Id of the optional `<script type="application/json">` carrying configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "jaque-config";

/// A mounted page. Dropping it removes every listener and cancels pending timers.
pub struct Page {
    store: SharedStore,
    panel: Option<Rc<PanelController>>,
    feedback: Option<Rc<FeedbackController>>,
    motion: MotionDecision,
    _reveal: Option<RevealHandle>,
    _listeners: Vec<EventListener>,
}

impl Page {
    /// Restore preferences, apply them, then wire each controller whose elements exist.
    ///
    /// # Errors
    /// Returns an error if there is no window, document or body.
    pub fn mount(config: &PageConfig) -> Result<Self, PageError> {
        let win = dom::window().ok_or(PageError::NoWindow)?;
        let doc = win.document().ok_or(PageError::NoDocument)?;
        let body = doc.body().ok_or(PageError::NoBody)?;

        let mut store = PreferenceStore::with_key(WebStorage::local(), &config.storage_key);
        if store.restore() {
            log::debug!("restored accessibility preferences {:?}", store.prefs());
        }
        let store = Rc::new(RefCell::new(store));

        let font = Rc::new(FontScaleController::new(
            &doc,
            body,
            Rc::clone(&store),
            &config.ids,
            &config.classes,
        ));
        font.render();
        let mut listeners = font.wire();

        let panel = PanelController::new(&doc, &config.ids, &config.classes, &config.timings)
            .map(Rc::new);
        if let Some(panel) = &panel {
            panel.render(panel.view());
            listeners.extend(panel.wire(&doc));
        }

        let feedback = FeedbackController::new(&doc, &config.ids, &config.classes, &config.timings)
            .map(Rc::new);
        if let Some(feedback) = &feedback {
            listeners.push(feedback.wire());
        }

        let (motion, reveal) = match reveal::bootstrap(&win, &config.reveal) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("scroll reveal setup failed: {err}");
                (MotionDecision::Unavailable, None)
            }
        };

        Ok(Self {
            store,
            panel,
            feedback,
            motion,
            _reveal: reveal,
            _listeners: listeners,
        })
    }

    #[must_use]
    pub fn preferences(&self) -> AccessibilityPreferences {
        self.store.borrow().prefs()
    }

    #[must_use]
    pub const fn motion(&self) -> MotionDecision {
        self.motion
    }

    #[must_use]
    pub const fn panel(&self) -> Option<&Rc<PanelController>> {
        self.panel.as_ref()
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<&Rc<FeedbackController>> {
        self.feedback.as_ref()
    }
}

/// Read configuration overrides from the page, falling back to defaults.
#[must_use]
pub fn page_config(doc: &Document) -> PageConfig {
    let Some(text) = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            PageConfig::default()
        }
    }
}

thread_local! {
    static CURRENT: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Mount the page with its configuration and keep it alive for the document's lifetime.
///
/// # Errors
/// Returns an error if mounting fails.
pub fn boot() -> Result<(), PageError> {
    let doc = dom::document().ok_or(PageError::NoDocument)?;
    let page = Page::mount(&page_config(&doc))?;
    CURRENT.with(|current| *current.borrow_mut() = Some(page));
    Ok(())
}

/// Boot now if the document has been parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
/// Returns an error if booting fails immediately or the listener cannot be registered.
pub fn boot_when_ready() -> Result<(), PageError> {
    let doc = dom::document().ok_or(PageError::NoDocument)?;
    if doc.ready_state() != "loading" {
        return boot();
    }
    let on_ready: Closure<dyn FnMut()> = Closure::once(|| {
        if let Err(err) = boot() {
            log::error!("accessibility page setup failed: {err}");
        }
    });
    doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}
