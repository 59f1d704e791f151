use packlab_core::{
    CATALOG, ContainerRole, GridShape, Layout, LayoutError, StyleTarget, Theme, place, resolve,
};
use yew::prelude::*;

use crate::components::icon::Icon;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
}

fn layout_or_prefix() -> Layout {
    match place(CATALOG, GridShape::STANDARD) {
        Ok(layout) => layout,
        Err(LayoutError::Overflow {
            item_id, placed, ..
        }) => {
            // Authoring defect: render what fits, surface the rest.
            log::warn!("catalog overflows the grid at '{item_id}'; rendering the feasible prefix");
            placed
        }
    }
}

/// The 4x4 inventory grid. Placement comes fresh from the layout engine on
/// every render; each tile spans its footprint through `grid-area`.
#[function_component(InventoryGrid)]
pub fn inventory_grid(p: &Props) -> Html {
    let layout = layout_or_prefix();
    let surface_class = classes!(
        "w-full",
        "aspect-square",
        "relative",
        "grid",
        "grid-cols-4",
        "grid-rows-4",
        "gap-1",
        "p-4",
        "rounded-lg",
        "overflow-hidden",
        resolve(p.theme, StyleTarget::Role(ContainerRole::GridSurface)),
    );

    let tiles = layout
        .slots()
        .iter()
        .map(|slot| {
            let item = slot.item;
            let placement = slot.placement;
            let style = format!(
                "grid-area: {} / {} / span {} / span {}",
                placement.row + 1,
                placement.col + 1,
                placement.footprint.h,
                placement.footprint.w,
            );
            let tile_class = classes!(
                "flex",
                "flex-col",
                "items-center",
                "justify-center",
                "p-2",
                "select-none",
                "relative",
                "z-10",
                resolve(p.theme, StyleTarget::Category(item.category)),
            );
            html! {
                <div key={item.id} class={tile_class} {style} data-testid={format!("tile-{}", item.id)}>
                    <Icon icon={item.icon} class={classes!("text-2xl")} />
                    <span class="text-[10px] mt-1 font-bold tracking-wider opacity-80 uppercase text-center leading-tight">
                        { item.name }
                    </span>
                    <span class="text-[9px] opacity-60">
                        { format!("{}x{} // {}", item.footprint.w, item.footprint.h, item.category) }
                    </span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class={surface_class} data-testid="inventory-grid">
            { tiles }
        </div>
    }
}
