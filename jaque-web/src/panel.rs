//! Accessibility options panel: toggle, outside click and Escape dismissal.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use jaque_core::{
    ClickOrigin, ElementIds, PanelMachine, PanelTransition, PanelView, StateClasses, TaskTicket,
    Timings,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, KeyboardEvent};

use crate::a11y;
use crate::dom;
use crate::timer::TimerSlot;

pub struct PanelController {
    machine: RefCell<PanelMachine>,
    timer: RefCell<TimerSlot>,
    toggle: HtmlElement,
    panel: HtmlElement,
    visible_class: String,
}

impl PanelController {
    /// Build the controller when both the toggle and the panel exist.
    #[must_use]
    pub fn new(
        doc: &Document,
        ids: &ElementIds,
        classes: &StateClasses,
        timings: &Timings,
    ) -> Option<Self> {
        let toggle = dom::optional_element::<HtmlElement>(doc, &ids.menu_toggle)?;
        let panel = dom::optional_element::<HtmlElement>(doc, &ids.options_panel)?;
        Some(Self {
            machine: RefCell::new(PanelMachine::new(
                timings.panel_entrance_ms,
                timings.panel_close_ms,
            )),
            timer: RefCell::new(TimerSlot::default()),
            toggle,
            panel,
            visible_class: classes.panel_visible.clone(),
        })
    }

    #[must_use]
    pub fn view(&self) -> PanelView {
        self.machine.borrow().view()
    }

    /// Write `aria-expanded`, the visible class and the animation styles from one view.
    pub fn render(&self, view: PanelView) {
        let _ = self
            .toggle
            .set_attribute("aria-expanded", view.aria_expanded());
        a11y::set_class(&self.panel, &self.visible_class, view.expanded);
        dom::set_style(&self.panel, "display", Some(view.display()));
        dom::set_style(&self.panel, "opacity", Some(view.opacity()));
        dom::set_style(&self.panel, "transform", Some(view.transform()));
    }

    pub fn toggle(self: &Rc<Self>) {
        let transition = self.machine.borrow_mut().toggle();
        self.apply(transition);
    }

    pub fn on_document_click(self: &Rc<Self>, target: Option<&EventTarget>) {
        let origin = ClickOrigin::classify(
            dom::contains_target(&self.toggle, target),
            dom::contains_target(&self.panel, target),
        );
        let transition = self.machine.borrow_mut().on_document_click(origin);
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    pub fn on_key(self: &Rc<Self>, key: &str) {
        let transition = self.machine.borrow_mut().on_key(key);
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn apply(self: &Rc<Self>, transition: PanelTransition) {
        self.render(transition.view);
        if let Some((ticket, delay_ms)) = transition.schedule {
            let this = Rc::downgrade(self);
            self.timer.borrow_mut().replace(delay_ms, move || {
                if let Some(this) = this.upgrade() {
                    this.on_timer(ticket);
                }
            });
        }
    }

    fn on_timer(&self, ticket: TaskTicket) {
        let view = self.machine.borrow_mut().on_timer(ticket);
        if let Some(view) = view {
            self.render(view);
        }
    }

    /// Register the toggle click, document click and Escape handlers.
    #[must_use]
    pub fn wire(self: &Rc<Self>, doc: &Document) -> Vec<EventListener> {
        let on_toggle = {
            let this = Rc::clone(self);
            EventListener::new(&self.toggle, "click", move |_| this.toggle())
        };
        let on_click = {
            let this = Rc::clone(self);
            EventListener::new(doc, "click", move |event| {
                this.on_document_click(event.target().as_ref());
            })
        };
        let on_key = {
            let this = Rc::clone(self);
            EventListener::new(doc, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    this.on_key(&event.key());
                }
            })
        };
        vec![on_toggle, on_click, on_key]
    }
}
