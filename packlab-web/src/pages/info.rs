use packlab_core::Session;
use yew::prelude::*;

use crate::components::ui::item_info::ItemInfo;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: Session,
    pub on_inspect: Callback<&'static str>,
}

#[function_component(InfoPage)]
pub fn info_page(p: &Props) -> Html {
    html! {
        <section class="w-full h-full" data-testid="info-scene">
            <ItemInfo session={p.session} on_inspect={p.on_inspect.clone()} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use packlab_core::{Scene, Selection, Theme};
    use yew::LocalServerRenderer;

    #[test]
    fn info_scene_hosts_the_item_browser() {
        let props = Props {
            session: Session::new(Selection {
                theme: Theme::Cursed,
                scene: Scene::Info,
            }),
            on_inspect: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<InfoPage>::with_props(props).render());
        assert!(html.contains("item-info"));
        assert!(html.contains("Iron Sword"));
    }
}
