#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod pages;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // The style tables are authored data; a hole in them is a defect to
    // fail on, not to paper over with a fallback rule.
    if let Err(err) = packlab_core::ensure_registry_valid() {
        panic!("theme registry rejected: {err}");
    }
    yew::Renderer::<app::App>::new().render();
}
