use packlab_core::{ContainerRole, IconId, StyleTarget, Theme, resolve};
use yew::prelude::*;

use crate::components::icon::Icon;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
}

/// Non-blocking alert painted above whichever scene is active. Showing or
/// hiding it is the session owner's call; this component only renders.
#[function_component(TraitorOverlay)]
pub fn traitor_overlay(p: &Props) -> Html {
    let overlay_class = classes!(
        "absolute",
        "inset-0",
        "flex",
        "flex-col",
        "items-center",
        "justify-center",
        "p-8",
        "text-center",
        "z-50",
        "pointer-events-none",
        resolve(p.theme, StyleTarget::Role(ContainerRole::TraitorOverlay)),
    );

    html! {
        <div class={overlay_class} role="alert" data-testid="traitor-overlay">
            <div class="max-w-md">
                <Icon icon={IconId::Skull} class={classes!("text-6xl", "mb-4")} />
                <h2 class="text-4xl mb-2 font-bold">{ "TRAITOR DETECTED" }</h2>
                <p class="opacity-80 text-lg">
                    { "Someone has sabotaged the supplies. Trust no one." }
                </p>
            </div>
        </div>
    }
}
