use futures::executor::block_on;
use packlab_core::{Scene, Selection, Session, Theme};
use packlab_web::app::view::{AppCallbacks, render_app};
use yew::LocalServerRenderer;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
struct HarnessProps {
    session: Session,
}

#[function_component(Harness)]
fn harness(p: &HarnessProps) -> Html {
    let callbacks = AppCallbacks {
        on_theme: Callback::noop(),
        on_scene: Callback::noop(),
        on_toggle_traitor: Callback::noop(),
        on_inspect: Callback::noop(),
    };
    render_app(p.session, &callbacks)
}

fn render(session: Session) -> String {
    block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { session }).render())
}

fn session_for(theme: Theme, scene: Scene) -> Session {
    Session::new(Selection { theme, scene })
}

#[test]
fn each_scene_renders_its_own_view() {
    let cases = [
        (Scene::Inventory, "inventory-scene"),
        (Scene::Battle, "battle-scene"),
        (Scene::Combined, "combined-scene"),
        (Scene::Info, "info-scene"),
    ];
    for (scene, marker) in cases {
        let html = render(session_for(Theme::Cursed, scene));
        assert!(html.contains(marker), "{scene} did not render {marker}");
        for (other, other_marker) in cases {
            if other != scene {
                assert!(
                    !html.contains(other_marker),
                    "{scene} leaked {other_marker}"
                );
            }
        }
    }
}

#[test]
fn traitor_overlay_floats_above_any_scene() {
    for scene in Scene::ALL {
        let mut session = session_for(Theme::Cyber, scene);
        assert!(!render(session).contains("traitor-overlay"));
        session.toggle_traitor();
        let html = render(session);
        assert!(html.contains("traitor-overlay"));
        assert!(html.contains("TRAITOR DETECTED"));
    }
}

#[test]
fn shell_classes_follow_the_theme() {
    let cursed = render(session_for(Theme::Cursed, Scene::Inventory));
    assert!(cursed.contains("bg-[#1e293b]"));
    assert!(cursed.contains("font-cursed"));

    let arctic = render(session_for(Theme::Arctic, Scene::Inventory));
    assert!(arctic.contains("bg-[#f8fafc]"));
    assert!(arctic.contains("font-arctic"));
}

#[test]
fn header_is_present_in_every_scene() {
    for scene in Scene::ALL {
        let html = render(session_for(Theme::Arctic, scene));
        assert!(html.contains("PACK CAREFULLY"));
    }
}
