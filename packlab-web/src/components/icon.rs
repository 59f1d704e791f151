use packlab_core::IconId;
use yew::prelude::*;

/// Glyph for an icon key. The catalog names glyphs; which character stands
/// in for each is a presentation choice made entirely here.
#[must_use]
pub const fn glyph(icon: IconId) -> &'static str {
    match icon {
        IconId::Sword => "⚔",
        IconId::Activity => "✚",
        IconId::Flame => "🜂",
        IconId::Shield => "⛨",
        IconId::Chip => "▦",
        IconId::Gem => "◈",
        IconId::Skull => "☠",
        IconId::Eye => "👁",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub icon: IconId,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(p: &Props) -> Html {
    html! {
        <span class={classes!("leading-none", p.class.clone())} aria-hidden="true">
            { glyph(p.icon) }
        </span>
    }
}
