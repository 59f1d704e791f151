//! Two-way binding between the `(theme, scene)` selection and the address
//! bar. Load-side parsing lives in the core codec; this module only reads
//! `location.search` at startup and mirrors every later change back with
//! `history.replaceState`.

use packlab_core::Selection;
#[cfg(target_arch = "wasm32")]
use packlab_core::Session;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// The `?`-prefixed form handed to `history.replaceState`.
#[must_use]
pub fn query_url(selection: Selection) -> String {
    format!("?{}", selection.to_query())
}

/// Initial selection from the current URL; invalid or missing parameters
/// fall back to defaults inside the codec.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn initial_selection() -> Selection {
    Selection::from_query(&crate::dom::location_search())
}

/// Rewrite the query string whenever theme or scene changes. The traitor
/// flag and the inspected item are session-local and never serialized.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_query_with_selection(session: &UseStateHandle<Session>) {
    let selection = session.selection();
    use_effect_with(selection, move |selection| {
        crate::dom::replace_query(&query_url(*selection));
    });
}
