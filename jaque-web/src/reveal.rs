//! Optional reveal-on-scroll animation, gated on reduced motion.

use jaque_core::constants::{REDUCED_MOTION_QUERY, SCROLL_REVEAL_GLOBAL};
use jaque_core::{MotionDecision, RevealSettings};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use crate::dom::PageError;

/// Keeps the `beforeReveal` callback alive for as long as the library may call it.
pub struct RevealHandle {
    _before_reveal: Closure<dyn FnMut(JsValue)>,
}

/// Whether the platform reports `prefers-reduced-motion: reduce`.
///
/// Browsers without `matchMedia` count as not reduced.
#[must_use]
pub fn prefers_reduced_motion(win: &Window) -> bool {
    win.match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// The `ScrollReveal` factory, when the library is loaded on this page.
#[must_use]
pub fn scroll_reveal_factory(win: &Window) -> Option<Function> {
    Reflect::get(win, &JsValue::from_str(SCROLL_REVEAL_GLOBAL))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

/// Run the startup motion check and, if it passes, configure and start the reveal sequence.
///
/// # Errors
/// Returns an error if the library is present but rejects the configuration.
pub fn bootstrap(
    win: &Window,
    settings: &RevealSettings,
) -> Result<(MotionDecision, Option<RevealHandle>), PageError> {
    let factory = scroll_reveal_factory(win);
    let decision = MotionDecision::decide(prefers_reduced_motion(win), factory.is_some());
    log::debug!("scroll reveal: {decision:?}");
    let Some(factory) = factory.filter(|_| decision.should_animate()) else {
        return Ok((decision, None));
    };

    let options = serde_wasm_bindgen::to_value(&settings.options)
        .map_err(|err| PageError::from(JsValue::from(err)))?;
    let instance = factory.call1(&JsValue::UNDEFINED, &options)?;
    let reveal = Reflect::get(&instance, &JsValue::from_str("reveal"))?
        .dyn_into::<Function>()
        .map_err(|_| PageError::Js("ScrollReveal instance has no reveal()".to_string()))?;

    let before_reveal = Closure::wrap(Box::new(|el: JsValue| {
        if let Some(el) = el.dyn_ref::<Element>() {
            let _ = el.set_attribute("aria-hidden", "false");
        }
    }) as Box<dyn FnMut(JsValue)>);
    let sequence = Object::new();
    Reflect::set(
        &sequence,
        &JsValue::from_str("interval"),
        &JsValue::from(settings.sequence.interval),
    )?;
    Reflect::set(
        &sequence,
        &JsValue::from_str("beforeReveal"),
        before_reveal.as_ref(),
    )?;
    reveal.call2(
        &instance,
        &JsValue::from_str(&settings.sequence.selector()),
        &sequence,
    )?;

    Ok((
        decision,
        Some(RevealHandle {
            _before_reveal: before_reveal,
        }),
    ))
}
