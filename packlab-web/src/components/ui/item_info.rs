use packlab_core::{CATALOG, ContainerRole, Session, StyleTarget, resolve};
use yew::prelude::*;

use crate::components::icon::Icon;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: Session,
    pub on_inspect: Callback<&'static str>,
}

/// Item database browser: the catalog on the left, the inspected item's
/// details on the right.
#[function_component(ItemInfo)]
pub fn item_info(p: &Props) -> Html {
    let theme = p.session.theme;
    let inspected = p.session.inspected_item();

    let entries = CATALOG
        .iter()
        .map(|item| {
            let active = inspected.is_some_and(|selected| selected.id == item.id);
            let on_inspect = p.on_inspect.clone();
            let id = item.id;
            let class = if active {
                "w-full text-left px-3 py-2 rounded-lg font-bold bg-white/20"
            } else {
                "w-full text-left px-3 py-2 rounded-lg opacity-70 hover:opacity-100 hover:bg-white/10"
            };
            html! {
                <li key={item.id}>
                    <button {class} onclick={Callback::from(move |_| on_inspect.emit(id))}>
                        { item.name }
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    let detail = inspected.map_or_else(
        || html! { <p class="opacity-60">{ "Select an item." }</p> },
        |item| {
            let tile_class = classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "w-16",
                "h-16",
                "mb-3",
                resolve(theme, StyleTarget::Category(item.category)),
            );
            html! {
                <div data-testid="item-detail">
                    <div class={tile_class}>
                        <Icon icon={item.icon} class={classes!("text-3xl")} />
                    </div>
                    <h3 class="text-lg font-bold">{ item.name }</h3>
                    <p class="text-xs uppercase tracking-widest opacity-60">
                        { format!("{} // {}x{}", item.category, item.footprint.w, item.footprint.h) }
                    </p>
                    <p class="mt-2 text-sm opacity-80">{ item.flavor }</p>
                </div>
            }
        },
    );

    let pane_class = classes!(
        "p-4",
        "rounded-xl",
        resolve(theme, StyleTarget::Role(ContainerRole::StatusCard)),
    );

    html! {
        <section class="grid grid-cols-2 gap-4" data-testid="item-info">
            <ul class="space-y-1" aria-label="Item catalog">{ entries }</ul>
            <div class={pane_class}>{ detail }</div>
        </section>
    }
}
