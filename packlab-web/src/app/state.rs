//! The session handle and its transition callbacks.
//!
//! One writer: every mutation copies the current snapshot, applies a named
//! transition from the core, and sets the handle. Views receive plain
//! `Session` copies and the callbacks, nothing else.

use packlab_core::{Scene, Selection, Session, Theme};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<Session>,
}

#[hook]
pub fn use_app_state(initial: Selection) -> AppState {
    AppState {
        session: use_state(move || Session::new(initial)),
    }
}

impl AppState {
    #[must_use]
    pub fn snapshot(&self) -> Session {
        *self.session
    }

    #[must_use]
    pub fn on_theme(&self) -> Callback<Theme> {
        let handle = self.session.clone();
        Callback::from(move |theme| {
            let mut next = *handle;
            next.set_theme(theme);
            handle.set(next);
        })
    }

    #[must_use]
    pub fn on_scene(&self) -> Callback<Scene> {
        let handle = self.session.clone();
        Callback::from(move |scene| {
            let mut next = *handle;
            next.set_scene(scene);
            handle.set(next);
        })
    }

    #[must_use]
    pub fn on_toggle_traitor(&self) -> Callback<()> {
        let handle = self.session.clone();
        Callback::from(move |()| {
            let mut next = *handle;
            next.toggle_traitor();
            handle.set(next);
        })
    }

    #[must_use]
    pub fn on_inspect(&self) -> Callback<&'static str> {
        let handle = self.session.clone();
        Callback::from(move |id| {
            let mut next = *handle;
            next.inspect(id);
            handle.set(next);
        })
    }
}
