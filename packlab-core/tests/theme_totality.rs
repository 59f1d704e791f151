use packlab_core::{
    CATALOG, Category, ContainerRole, StyleTarget, Theme, ensure_registry_valid, resolve,
};

#[test]
fn every_theme_target_pair_resolves_non_empty() {
    ensure_registry_valid().expect("style tables are authored total");
    for theme in Theme::ALL {
        for target in StyleTarget::all() {
            let rule = resolve(theme, target);
            assert!(
                !rule.trim().is_empty(),
                "{theme} resolves an empty rule for {target:?}"
            );
        }
    }
}

#[test]
fn every_catalog_item_has_a_rule_in_every_theme() {
    for theme in Theme::ALL {
        for item in CATALOG {
            let rule = resolve(theme, StyleTarget::Category(item.category));
            assert!(!rule.is_empty(), "{theme} lacks a rule for {}", item.id);
        }
    }
}

#[test]
fn themes_actually_differ_per_category() {
    // Guards against a copy-paste table collapsing two themes into one.
    for category in Category::ALL {
        let rules: Vec<&str> = Theme::ALL
            .iter()
            .map(|theme| resolve(*theme, StyleTarget::Category(category)))
            .collect();
        assert_ne!(rules[0], rules[1], "CURSED and CYBER share a {category} rule");
        assert_ne!(rules[1], rules[2], "CYBER and ARCTIC share a {category} rule");
    }
}

#[test]
fn overlay_rules_are_theme_specific() {
    let overlay = |theme| resolve(theme, StyleTarget::Role(ContainerRole::TraitorOverlay));
    assert_ne!(overlay(Theme::Cursed), overlay(Theme::Cyber));
    assert_ne!(overlay(Theme::Cyber), overlay(Theme::Arctic));
}
