use packlab_core::Session;
use yew::prelude::*;

use crate::components::ui::action_bar::ActionBar;
use crate::components::ui::inventory_grid::InventoryGrid;
use crate::components::ui::status_card::StatusCard;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: Session,
}

#[function_component(InventoryPage)]
pub fn inventory_page(p: &Props) -> Html {
    let theme = p.session.theme;
    html! {
        <section class="w-full h-full flex flex-col gap-4" data-testid="inventory-scene">
            <StatusCard {theme} />
            <InventoryGrid {theme} />
            <ActionBar {theme} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn inventory_scene_composes_card_grid_and_actions() {
        let props = Props {
            session: Session::default(),
        };
        let html = block_on(LocalServerRenderer::<InventoryPage>::with_props(props).render());
        assert!(html.contains("status-card"));
        assert!(html.contains("inventory-grid"));
        assert!(html.contains("action-bar"));
    }
}
