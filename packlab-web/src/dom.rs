use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Current `location.search`, including the leading `?` when present.
/// Empty when the location cannot be read.
#[must_use]
pub fn location_search() -> String {
    window().location().search().unwrap_or_default()
}

/// Rewrite the query string in place via `history.replaceState`, adding no
/// navigation entry. Failures are logged, never fatal.
pub fn replace_query(query: &str) {
    let result = window()
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(query)));
    if let Err(err) = result {
        log::warn!("failed to rewrite query string: {}", js_error_message(&err));
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
