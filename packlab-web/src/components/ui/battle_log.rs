use packlab_core::battle::{BATTLE_LOG, COMBATANTS};
use packlab_core::{ContainerRole, StyleTarget, Theme, resolve};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
}

/// Combatant cards plus the static battle log. The log never grows and the
/// morale bars never move.
#[function_component(BattleLog)]
pub fn battle_log(p: &Props) -> Html {
    let card_class = classes!(
        "p-3",
        "rounded-xl",
        "flex",
        "items-center",
        "justify-between",
        resolve(p.theme, StyleTarget::Role(ContainerRole::StatusCard)),
    );
    let danger_class = classes!(
        "px-2",
        "py-1",
        "rounded",
        "text-xs",
        "font-bold",
        "text-white",
        resolve(p.theme, StyleTarget::Role(ContainerRole::Danger)),
    );

    let combatants = COMBATANTS
        .iter()
        .map(|combatant| {
            let badge = if combatant.morale < 100 {
                html! { <span class={danger_class.clone()}>{ combatant.status }</span> }
            } else {
                html! { <span class="text-xs font-bold opacity-80">{ combatant.status }</span> }
            };
            html! {
                <div key={combatant.name} class={card_class.clone()}>
                    <span class="font-bold">{ combatant.name }</span>
                    { badge }
                    <span class="text-sm">{ format!("Morale {}%", combatant.morale) }</span>
                </div>
            }
        })
        .collect::<Html>();

    let log_lines = BATTLE_LOG
        .iter()
        .map(|line| html! { <li class="opacity-80">{ *line }</li> })
        .collect::<Html>();

    let log_class = classes!(
        "p-4",
        "rounded-lg",
        "text-sm",
        "space-y-1",
        resolve(p.theme, StyleTarget::Role(ContainerRole::GridSurface)),
    );

    html! {
        <section class="flex flex-col gap-3" data-testid="battle-log">
            { combatants }
            <ul class={log_class} aria-label="Battle log">
                { log_lines }
            </ul>
        </section>
    }
}
