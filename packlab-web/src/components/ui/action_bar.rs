use packlab_core::{ContainerRole, StyleTarget, Theme, resolve};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
}

/// Scavenge / Rest buttons. Purely decorative: there is no gameplay to
/// trigger, so the handlers are no-ops.
#[function_component(ActionBar)]
pub fn action_bar(p: &Props) -> Html {
    let base = "py-4 rounded-xl font-bold uppercase tracking-wider active:scale-95";
    let primary = classes!(
        base,
        resolve(p.theme, StyleTarget::Role(ContainerRole::ActionPrimary)),
    );
    let secondary = classes!(
        base,
        "opacity-80",
        "hover:opacity-100",
        resolve(p.theme, StyleTarget::Role(ContainerRole::ActionSecondary)),
    );

    html! {
        <div class="grid grid-cols-2 gap-4 mt-auto" data-testid="action-bar">
            <button class={primary}>{ "Scavenge" }</button>
            <button class={secondary}>{ "Rest" }</button>
        </div>
    }
}
