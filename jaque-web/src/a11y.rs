// Accessibility presentation helpers

use jaque_core::{AccessibilityPreferences, FontControls, StateClasses};
use web_sys::{Element, HtmlButtonElement, HtmlElement};

use crate::dom;

/// Apply the font scale and contrast mode to the document body
///
/// Writes `font-size` in `rem` (or clears it at the default scale) and adds or removes the
/// high-contrast class. Both come from the same preference value, so they cannot drift apart.
pub fn apply_to_document(
    body: &HtmlElement,
    prefs: &AccessibilityPreferences,
    classes: &StateClasses,
) {
    dom::set_style(body, "font-size", prefs.font_size_css().as_deref());
    set_class(body, &classes.high_contrast, prefs.high_contrast);
}

/// Disable the font controls that would step past a boundary.
pub fn render_font_controls(
    increase: Option<&HtmlButtonElement>,
    decrease: Option<&HtmlButtonElement>,
    controls: FontControls,
) {
    if let Some(button) = increase {
        button.set_disabled(controls.increase_disabled);
    }
    if let Some(button) = decrease {
        button.set_disabled(controls.decrease_disabled);
    }
}

/// Reflect a toggle's state through `aria-pressed`.
pub fn set_pressed(el: &Element, pressed: &str) {
    let _ = el.set_attribute("aria-pressed", pressed);
}

/// Add or remove a class according to `enabled`.
pub fn set_class(el: &Element, class: &str, enabled: bool) {
    let _ = el.class_list().toggle_with_force(class, enabled);
}

/// Move focus to a message region so screen readers announce it
///
/// The region is made programmatically focusable first; it stays out of the tab order.
pub fn focus_for_announcement(el: &HtmlElement) {
    el.set_tab_index(-1);
    if let Err(err) = el.focus() {
        log::debug!("could not focus message region: {}", dom::js_error_message(&err));
    }
}
