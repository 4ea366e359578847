#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod controls;
pub mod dom;
pub mod feedback;
pub mod logger;
pub mod page;
pub mod panel;
pub mod reveal;
pub mod storage;
pub mod timer;

pub use page::{Page, boot, boot_when_ready, page_config};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init();
    if let Err(err) = page::boot_when_ready() {
        dom::console_error(&format!("accessibility page setup failed: {err}"));
    }
}
