use packlab_core::battle::COMBATANTS;
use packlab_core::{ContainerRole, StyleTarget, Theme, resolve};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
}

/// The player status card above the grid. Numbers are decoration; only the
/// styling follows the theme.
#[function_component(StatusCard)]
pub fn status_card(p: &Props) -> Html {
    let player = COMBATANTS[0];
    let card_class = classes!(
        "p-4",
        "rounded-xl",
        "flex",
        "items-center",
        "justify-between",
        "shadow-lg",
        resolve(p.theme, StyleTarget::Role(ContainerRole::StatusCard)),
    );
    let avatar_class = classes!(
        "w-10",
        "h-10",
        "rounded-full",
        "flex",
        "items-center",
        "justify-center",
        "font-bold",
        resolve(p.theme, StyleTarget::Role(ContainerRole::Accent)),
    );

    html! {
        <div class={card_class} data-testid="status-card">
            <div class="flex items-center gap-3">
                <div class={avatar_class}>{ player.name }</div>
                <div>
                    <div class="text-xs opacity-60 uppercase tracking-widest">{ "Status" }</div>
                    <div class="font-bold">{ player.status }</div>
                </div>
            </div>
            <div class="text-right">
                <div class="text-xs opacity-60 uppercase tracking-widest">{ "Morale" }</div>
                <div class="font-bold text-xl">{ format!("{}%", player.morale) }</div>
            </div>
        </div>
    }
}
