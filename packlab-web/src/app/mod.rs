#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod state;
pub mod sync;
pub mod view;

pub use view::AppCallbacks;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state(sync::initial_selection());
    sync::use_sync_query_with_selection(&app_state.session);

    let callbacks = AppCallbacks {
        on_theme: app_state.on_theme(),
        on_scene: app_state.on_scene(),
        on_toggle_traitor: app_state.on_toggle_traitor(),
        on_inspect: app_state.on_inspect(),
    };
    view::render_app(app_state.snapshot(), &callbacks)
}
