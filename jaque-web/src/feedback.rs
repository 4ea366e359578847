//! Contact form submission feedback.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use jaque_core::{ElementIds, FeedbackMachine, FeedbackView, StateClasses, TaskTicket, Timings};
use web_sys::{Document, Event, HtmlElement, HtmlFormElement};

use crate::a11y;
use crate::dom;
use crate::timer::TimerSlot;

pub struct FeedbackController {
    machine: RefCell<FeedbackMachine>,
    timer: RefCell<TimerSlot>,
    form: HtmlFormElement,
    message: Option<HtmlElement>,
    hidden_class: String,
}

impl FeedbackController {
    /// Build the controller when the form exists; the thank-you region is optional.
    #[must_use]
    pub fn new(
        doc: &Document,
        ids: &ElementIds,
        classes: &StateClasses,
        timings: &Timings,
    ) -> Option<Self> {
        let form = dom::optional_element::<HtmlFormElement>(doc, &ids.contact_form)?;
        Some(Self {
            machine: RefCell::new(FeedbackMachine::new(timings.feedback_hide_ms)),
            timer: RefCell::new(TimerSlot::default()),
            form,
            message: dom::optional_element(doc, &ids.thank_you),
            hidden_class: classes.hidden.clone(),
        })
    }

    #[must_use]
    pub fn view(&self) -> FeedbackView {
        self.machine.borrow().view()
    }

    fn render(&self, view: FeedbackView) {
        if let Some(message) = &self.message {
            a11y::set_class(message, &self.hidden_class, !view.visible);
        }
    }

    /// Handle a submit: stay on the page, confirm, announce, clear the fields, and schedule
    /// the confirmation to hide again.
    pub fn on_submit(self: &Rc<Self>, event: &Event) {
        event.prevent_default();
        let (view, ticket) = self.machine.borrow_mut().submit();
        self.render(view);
        if let Some(message) = &self.message {
            a11y::focus_for_announcement(message);
        }
        self.form.reset();

        let delay_ms = self.machine.borrow().hide_delay_ms();
        let this = Rc::downgrade(self);
        self.timer.borrow_mut().replace(delay_ms, move || {
            if let Some(this) = this.upgrade() {
                this.on_timer(ticket);
            }
        });
    }

    fn on_timer(&self, ticket: TaskTicket) {
        let view = self.machine.borrow_mut().expire(ticket);
        if let Some(view) = view {
            self.render(view);
        }
    }

    /// Register the submit handler.
    #[must_use]
    pub fn wire(self: &Rc<Self>) -> EventListener {
        let this = Rc::clone(self);
        EventListener::new(&self.form, "submit", move |event| this.on_submit(event))
    }
}
