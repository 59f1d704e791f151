use packlab_core::Theme;
use yew::prelude::*;

use crate::components::ui::battle_log::BattleLog;
use crate::components::ui::inventory_grid::InventoryGrid;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
}

#[function_component(CombinedPage)]
pub fn combined_page(p: &Props) -> Html {
    html! {
        <section class="w-full h-full flex flex-col gap-4" data-testid="combined-scene">
            <InventoryGrid theme={p.theme} />
            <BattleLog theme={p.theme} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn combined_scene_stacks_grid_over_log() {
        let props = Props {
            theme: Theme::Arctic,
        };
        let html = block_on(LocalServerRenderer::<CombinedPage>::with_props(props).render());
        let grid = html.find("inventory-grid").expect("grid rendered");
        let log = html.find("battle-log").expect("log rendered");
        assert!(grid < log);
    }
}
