use packlab_core::{IconId, Scene, Session, Theme};
use yew::prelude::*;

use crate::components::icon::Icon;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: Session,
    pub on_theme: Callback<Theme>,
    pub on_scene: Callback<Scene>,
    pub on_toggle_traitor: Callback<()>,
}

/// Top bar: title, one button per theme, one tab per scene, and the
/// traitor-event eye toggle.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let theme_buttons = Theme::ALL
        .iter()
        .map(|theme| {
            let theme = *theme;
            let active = p.session.theme == theme;
            let on_theme = p.on_theme.clone();
            let class = if active {
                "px-4 py-2 rounded-full text-sm font-bold bg-white text-black shadow-lg scale-105"
            } else {
                "px-4 py-2 rounded-full text-sm font-bold bg-transparent hover:bg-white/10 text-current opacity-60 hover:opacity-100"
            };
            html! {
                <button
                    key={theme.as_str()}
                    {class}
                    aria-pressed={active.to_string()}
                    onclick={Callback::from(move |_| on_theme.emit(theme))}
                >
                    { theme.label() }
                </button>
            }
        })
        .collect::<Html>();

    let scene_tabs = Scene::ALL
        .iter()
        .map(|scene| {
            let scene = *scene;
            let active = p.session.scene == scene;
            let on_scene = p.on_scene.clone();
            let class = if active {
                "px-3 py-1 rounded-full text-xs font-bold bg-white/20"
            } else {
                "px-3 py-1 rounded-full text-xs opacity-60 hover:opacity-100 hover:bg-white/10"
            };
            html! {
                <button
                    key={scene.as_str()}
                    {class}
                    aria-pressed={active.to_string()}
                    onclick={Callback::from(move |_| on_scene.emit(scene))}
                >
                    { scene.label() }
                </button>
            }
        })
        .collect::<Html>();

    let on_toggle = p.on_toggle_traitor.clone();
    let eye_class = if p.session.traitor_alert {
        "p-2 rounded-full bg-red-500 text-white"
    } else {
        "p-2 rounded-full bg-white/10 hover:bg-white/20"
    };

    html! {
        <header class="z-10 w-full max-w-2xl flex flex-col gap-2 mb-12 bg-black/10 backdrop-blur-md p-4 rounded-3xl border border-white/10 shadow-xl">
            <div class="flex justify-between items-center">
                <h1 class="text-xl font-bold px-4 hidden sm:block">{ "PACK CAREFULLY" }</h1>
                <div class="flex gap-2">{ theme_buttons }</div>
                <button
                    class={eye_class}
                    title="Toggle Traitor Event"
                    onclick={Callback::from(move |_| on_toggle.emit(()))}
                >
                    <Icon icon={IconId::Eye} />
                </button>
            </div>
            <nav class="flex gap-2 justify-center" aria-label="Scenes">{ scene_tabs }</nav>
        </header>
    }
}
