use packlab_core::{ContainerRole, Scene, Session, StyleTarget, Theme, resolve};
use yew::prelude::*;

use crate::components::header::Header;
use crate::components::traitor_overlay::TraitorOverlay;
use crate::pages::battle::BattlePage;
use crate::pages::combined::CombinedPage;
use crate::pages::info::InfoPage;
use crate::pages::inventory::InventoryPage;

/// Every change request a view can emit back to the session owner.
#[derive(Clone, PartialEq)]
pub struct AppCallbacks {
    pub on_theme: Callback<Theme>,
    pub on_scene: Callback<Scene>,
    pub on_toggle_traitor: Callback<()>,
    pub on_inspect: Callback<&'static str>,
}

/// Pure render of the whole screen from a session snapshot.
#[must_use]
pub fn render_app(session: Session, callbacks: &AppCallbacks) -> Html {
    let theme = session.theme;
    let role = |role| resolve(theme, StyleTarget::Role(role));

    let shell_class = classes!(
        "min-h-screen",
        "w-full",
        "flex",
        "flex-col",
        "items-center",
        "p-4",
        "relative",
        "overflow-hidden",
        role(ContainerRole::Background),
        role(ContainerRole::Text),
        role(ContainerRole::Font),
    );

    let scene_view = match session.scene {
        Scene::Inventory => html! { <InventoryPage {session} /> },
        Scene::Battle => html! { <BattlePage {theme} /> },
        Scene::Combined => html! { <CombinedPage {theme} /> },
        Scene::Info => {
            let on_inspect = callbacks.on_inspect.clone();
            html! { <InfoPage {session} {on_inspect} /> }
        }
    };

    html! {
        <div class={shell_class} data-testid="app-shell">
            <Header
                {session}
                on_theme={callbacks.on_theme.clone()}
                on_scene={callbacks.on_scene.clone()}
                on_toggle_traitor={callbacks.on_toggle_traitor.clone()}
            />
            <main class="z-10 w-full max-w-md relative">
                if session.traitor_alert {
                    <TraitorOverlay {theme} />
                }
                { scene_view }
            </main>
        </div>
    }
}
