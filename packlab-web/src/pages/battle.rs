use packlab_core::Theme;
use yew::prelude::*;

use crate::components::ui::action_bar::ActionBar;
use crate::components::ui::battle_log::BattleLog;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
}

#[function_component(BattlePage)]
pub fn battle_page(p: &Props) -> Html {
    html! {
        <section class="w-full h-full flex flex-col gap-4" data-testid="battle-scene">
            <BattleLog theme={p.theme} />
            <ActionBar theme={p.theme} />
        </section>
    }
}
