#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use jaque_core::{AccessibilityPreferences, MotionDecision, PageConfig, PanelPhase};
use jaque_web::{Page, dom, reveal};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent,
    KeyboardEventInit,
};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<button id="botao-acessibilidade" aria-expanded="false">A11y</button>
<div id="opcoes-acessibilidade">
  <button id="aumentar-fonte">A+</button>
  <button id="diminuir-fonte">A-</button>
  <button id="alterna-contraste" aria-pressed="false">Contrast</button>
  <button id="reset-acessibilidade">Reset</button>
</div>
<main id="outside"><p>Content</p></main>
<form id="form-contato"><input id="nome" name="nome" value=""></form>
<div id="thank-you" class="d-none">Obrigado!</div>
"#;

fn fixture_config(name: &str) -> PageConfig {
    let mut config = PageConfig::default();
    config.storage_key = format!("jaque.test.{name}");
    config.timings.panel_entrance_ms = 5;
    config.timings.panel_close_ms = 30;
    config.timings.feedback_hide_ms = 60;
    if let Ok(storage) = dom::local_storage() {
        let _ = storage.remove_item(&config.storage_key);
    }
    config
}

fn mount_fixture(markup: &str, config: &PageConfig) -> Page {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    body.set_inner_html(markup);
    let _ = body.class_list().remove_1(&config.classes.high_contrast);
    let _ = body.style().remove_property("font-size");
    Page::mount(config).expect("page mounts")
}

fn element<T: JsCast>(id: &str) -> T {
    let doc = dom::document().expect("document");
    dom::element_by_id::<T>(&doc, id).unwrap_or_else(|| panic!("#{id} present"))
}

fn click(id: &str) {
    element::<HtmlElement>(id).click();
}

fn body() -> HtmlElement {
    dom::document().expect("document").body().expect("body")
}

#[wasm_bindgen_test]
fn six_increases_clamp_and_disable_increase() {
    let config = fixture_config("increase");
    let page = mount_fixture(FIXTURE, &config);
    for _ in 0..6 {
        click("aumentar-fonte");
    }
    assert!((page.preferences().font_scale - 1.5).abs() < f64::EPSILON);
    assert!(element::<HtmlButtonElement>("aumentar-fonte").disabled());
    assert!(!element::<HtmlButtonElement>("diminuir-fonte").disabled());
    assert_eq!(
        body().style().get_property_value("font-size").unwrap_or_default(),
        "1.5rem"
    );
}

#[wasm_bindgen_test]
fn contrast_toggle_updates_class_and_pressed_state() {
    let config = fixture_config("contrast");
    let _page = mount_fixture(FIXTURE, &config);
    let contrast = element::<HtmlElement>("alterna-contraste");

    click("alterna-contraste");
    assert!(body().class_list().contains("alto-contraste"));
    assert_eq!(contrast.get_attribute("aria-pressed").as_deref(), Some("true"));

    click("alterna-contraste");
    assert!(!body().class_list().contains("alto-contraste"));
    assert_eq!(contrast.get_attribute("aria-pressed").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn reset_clears_overrides_and_enables_controls() {
    let config = fixture_config("reset");
    let page = mount_fixture(FIXTURE, &config);
    for _ in 0..3 {
        click("diminuir-fonte");
    }
    click("alterna-contraste");
    assert!(element::<HtmlButtonElement>("diminuir-fonte").disabled());

    click("reset-acessibilidade");
    assert_eq!(page.preferences(), AccessibilityPreferences::default());
    assert!(!body().class_list().contains("alto-contraste"));
    assert_eq!(
        body().style().get_property_value("font-size").unwrap_or_default(),
        ""
    );
    assert!(!element::<HtmlButtonElement>("aumentar-fonte").disabled());
    assert!(!element::<HtmlButtonElement>("diminuir-fonte").disabled());
}

#[wasm_bindgen_test]
fn preferences_survive_a_remount() {
    let config = fixture_config("remount");
    let first = mount_fixture(FIXTURE, &config);
    click("aumentar-fonte");
    click("alterna-contraste");
    let saved = first.preferences();
    drop(first);

    let second = mount_fixture(FIXTURE, &config);
    assert!((second.preferences().font_scale - saved.font_scale).abs() < 1e-12);
    assert!(second.preferences().high_contrast);
    assert!(body().class_list().contains("alto-contraste"));
    assert_eq!(
        element::<HtmlElement>("alterna-contraste")
            .get_attribute("aria-pressed")
            .as_deref(),
        Some("true")
    );
}

#[wasm_bindgen_test]
fn corrupt_storage_mounts_with_defaults() {
    let config = fixture_config("corrupt");
    if let Ok(storage) = dom::local_storage() {
        let _ = storage.set_item(&config.storage_key, "{not json");
    }
    let doc = dom::document().expect("document");
    doc.body().expect("body").set_inner_html(FIXTURE);
    let page = Page::mount(&config).expect("page mounts");
    assert_eq!(page.preferences(), AccessibilityPreferences::default());
}

#[wasm_bindgen_test]
async fn panel_opens_then_outside_click_closes_consistently() {
    let config = fixture_config("panel");
    let page = mount_fixture(FIXTURE, &config);
    let toggle = element::<HtmlElement>("botao-acessibilidade");
    let panel = element::<HtmlElement>("opcoes-acessibilidade");

    click("botao-acessibilidade");
    // The opening click also reaches the document listener and must not close the panel.
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(panel.class_list().contains("apresenta-lista"));
    assert_eq!(panel.style().get_property_value("display").unwrap_or_default(), "block");

    TimeoutFuture::new(20).await;
    assert_eq!(panel.style().get_property_value("opacity").unwrap_or_default(), "1");

    click("aumentar-fonte");
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    click("outside");
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!panel.class_list().contains("apresenta-lista"));
    assert!(!page.panel().expect("panel wired").view().expanded);

    TimeoutFuture::new(60).await;
    assert_eq!(panel.style().get_property_value("display").unwrap_or_default(), "none");
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
async fn escape_closes_and_reopen_cancels_pending_hide() {
    let config = fixture_config("escape");
    let _page = mount_fixture(FIXTURE, &config);
    let panel = element::<HtmlElement>("opcoes-acessibilidade");

    click("botao-acessibilidade");
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    dom::document()
        .expect("document")
        .dispatch_event(&escape)
        .expect("dispatch");
    assert!(!panel.class_list().contains("apresenta-lista"));

    click("botao-acessibilidade");
    TimeoutFuture::new(60).await;
    assert!(panel.class_list().contains("apresenta-lista"));
    assert_eq!(panel.style().get_property_value("display").unwrap_or_default(), "block");
}

#[wasm_bindgen_test]
async fn submit_confirms_focuses_clears_then_hides() {
    let config = fixture_config("feedback");
    let _page = mount_fixture(FIXTURE, &config);
    let message = element::<HtmlElement>("thank-you");
    element::<HtmlInputElement>("nome").set_value("Ana");

    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).expect("event");
    element::<HtmlElement>("form-contato")
        .dispatch_event(&submit)
        .expect("dispatch");

    assert!(submit.default_prevented());
    assert!(!message.class_list().contains("d-none"));
    assert_eq!(message.get_attribute("tabindex").as_deref(), Some("-1"));
    let active = dom::document().expect("document").active_element();
    assert_eq!(active.map(|el| el.id()), Some("thank-you".to_string()));
    assert_eq!(element::<HtmlInputElement>("nome").value(), "");

    TimeoutFuture::new(120).await;
    assert!(message.class_list().contains("d-none"));
}

#[wasm_bindgen_test]
fn missing_elements_are_skipped() {
    let config = fixture_config("sparse");
    let page = mount_fixture(r#"<button id="aumentar-fonte">A+</button>"#, &config);
    assert!(page.panel().is_none());
    assert!(page.feedback().is_none());
    click("aumentar-fonte");
    assert!((page.preferences().font_scale - 1.1).abs() < 1e-9);
}

#[wasm_bindgen_test]
fn reveal_is_skipped_without_library() {
    let config = fixture_config("reveal");
    let page = mount_fixture(FIXTURE, &config);
    assert_ne!(page.motion(), MotionDecision::Animate);
}

/// Installs a `window.ScrollReveal` that records its arguments and reveals `#inicio` at once.
/// Dropping it removes the global again.
struct RecordingScrollReveal {
    calls: Object,
}

impl RecordingScrollReveal {
    fn install() -> Self {
        let calls = Object::new();
        let factory = Function::new_with_args(
            "calls",
            "return function (options) {
                calls.options = options;
                return {
                    reveal: function (selector, sequence) {
                        calls.selector = selector;
                        calls.interval = sequence.interval;
                        sequence.beforeReveal(document.getElementById('inicio'));
                    }
                };
            };",
        )
        .call1(&JsValue::UNDEFINED, &calls)
        .expect("stub factory");
        let win = dom::window().expect("window");
        Reflect::set(&win, &JsValue::from_str("ScrollReveal"), &factory).expect("install");
        Self { calls }
    }

    fn get(&self, path: &[&str]) -> JsValue {
        path.iter().fold(JsValue::from(self.calls.clone()), |value, key| {
            Reflect::get(&value, &JsValue::from_str(key)).expect("recorded field")
        })
    }
}

impl Drop for RecordingScrollReveal {
    fn drop(&mut self) {
        if let Some(win) = dom::window() {
            let _ = Reflect::delete_property(
                win.unchecked_ref::<Object>(),
                &JsValue::from_str("ScrollReveal"),
            );
        }
    }
}

#[wasm_bindgen_test]
fn reveal_library_receives_options_and_sequence() {
    let config = fixture_config("reveal-animate");
    let library = RecordingScrollReveal::install();
    let markup = format!(r#"{FIXTURE}<section id="inicio" aria-hidden="true">Inicio</section>"#);
    let page = mount_fixture(&markup, &config);

    if reveal::prefers_reduced_motion(&dom::window().expect("window")) {
        assert_eq!(page.motion(), MotionDecision::ReducedMotion);
        assert!(library.get(&["options"]).is_undefined());
        return;
    }

    assert_eq!(page.motion(), MotionDecision::Animate);
    assert_eq!(library.get(&["options", "origin"]).as_string().as_deref(), Some("top"));
    assert_eq!(library.get(&["options", "distance"]).as_string().as_deref(), Some("30px"));
    assert_eq!(library.get(&["options", "duration"]).as_f64(), Some(700.0));
    assert_eq!(library.get(&["options", "reset"]).as_bool(), Some(false));
    assert_eq!(
        library.get(&["options", "easing"]).as_string().as_deref(),
        Some("cubic-bezier(0.5, 0, 0, 1)")
    );
    assert_eq!(library.get(&["options", "viewFactor"]).as_f64(), Some(0.1));
    assert_eq!(
        library.get(&["selector"]).as_string().as_deref(),
        Some("#inicio, #como-funciona, #galeria, #contato")
    );
    assert_eq!(library.get(&["interval"]).as_f64(), Some(200.0));
    assert_eq!(
        element::<HtmlElement>("inicio")
            .get_attribute("aria-hidden")
            .as_deref(),
        Some("false")
    );
}

#[wasm_bindgen_test]
fn boot_mounts_at_once_when_the_document_is_parsed() {
    let config = fixture_config("boot");
    let doc = dom::document().expect("document");
    assert_ne!(doc.ready_state(), "loading");
    let markup = format!(
        r#"<script type="application/json" id="jaque-config">{{"storage_key":"{}"}}</script>{FIXTURE}"#,
        config.storage_key
    );
    body().set_inner_html(&markup);
    let _ = body().style().remove_property("font-size");

    jaque_web::boot_when_ready().expect("boot");
    click("aumentar-fonte");

    assert_eq!(
        body().style().get_property_value("font-size").unwrap_or_default(),
        "1.1rem"
    );
    let stored = dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(&config.storage_key).ok().flatten());
    assert!(stored.is_some_and(|raw| raw.contains("1.1")));
    let _ = body().style().remove_property("font-size");
}

#[wasm_bindgen_test]
fn panel_starts_closed() {
    let config = fixture_config("initial");
    let page = mount_fixture(FIXTURE, &config);
    let panel = page.panel().expect("panel wired");
    assert_eq!(panel.view(), jaque_core::PanelView::for_phase(PanelPhase::Closed));
    assert_eq!(
        element::<HtmlElement>("botao-acessibilidade")
            .get_attribute("aria-expanded")
            .as_deref(),
        Some("false")
    );
}
