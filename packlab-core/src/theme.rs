//! Theme registry and variant resolution.
//!
//! Every theme carries a complete bundle of style rules: one per container
//! role and one per item category. The rules themselves are plain CSS class
//! strings (swappable presentation data); the logic here is only the total
//! lookup and the startup check that keeps it total. Silent fallback to a
//! default rule is deliberately absent: a missing or empty rule is an
//! authoring defect surfaced by [`ensure_registry_valid`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::Category;

/// Closed set of cosmetic themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Theme {
    #[default]
    Cursed,
    Cyber,
    Arctic,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Cursed, Self::Cyber, Self::Arctic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cursed => "CURSED",
            Self::Cyber => "CYBER",
            Self::Arctic => "ARCTIC",
        }
    }

    /// Human-facing label for the theme switcher.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cursed => "Cursed",
            Self::Cyber => "Cyber",
            Self::Arctic => "Arctic",
        }
    }

    #[must_use]
    pub fn styles(self) -> &'static ThemeStyles {
        match self {
            Self::Cursed => &CURSED,
            Self::Cyber => &CYBER,
            Self::Arctic => &ARCTIC,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CURSED" => Ok(Self::Cursed),
            "CYBER" => Ok(Self::Cyber),
            "ARCTIC" => Ok(Self::Arctic),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Themed surfaces that are not item tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerRole {
    Background,
    Text,
    Font,
    Accent,
    Danger,
    GridSurface,
    StatusCard,
    ActionPrimary,
    ActionSecondary,
    TraitorOverlay,
}

impl ContainerRole {
    pub const ALL: [Self; 10] = [
        Self::Background,
        Self::Text,
        Self::Font,
        Self::Accent,
        Self::Danger,
        Self::GridSurface,
        Self::StatusCard,
        Self::ActionPrimary,
        Self::ActionSecondary,
        Self::TraitorOverlay,
    ];
}

/// What a style rule is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    Role(ContainerRole),
    Category(Category),
}

impl StyleTarget {
    /// Every resolvable target, for exhaustive validation sweeps.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        ContainerRole::ALL
            .into_iter()
            .map(Self::Role)
            .chain(Category::ALL.into_iter().map(Self::Category))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("theme {theme} has no style rule for {target:?}")]
    MissingRule { theme: Theme, target: StyleTarget },
}

/// Per-category tile rules for one theme.
#[derive(Debug, Clone, Copy)]
pub struct ItemRules {
    pub weapon: &'static str,
    pub potion: &'static str,
    pub scroll: &'static str,
    pub junk: &'static str,
    pub tech: &'static str,
    pub relic: &'static str,
}

impl ItemRules {
    #[must_use]
    pub const fn for_category(&self, category: Category) -> &'static str {
        match category {
            Category::Weapon => self.weapon,
            Category::Potion => self.potion,
            Category::Scroll => self.scroll,
            Category::Junk => self.junk,
            Category::Tech => self.tech,
            Category::Relic => self.relic,
        }
    }
}

/// The complete style bundle for one theme. All fields are CSS class
/// strings; none may be empty.
#[derive(Debug, Clone, Copy)]
pub struct ThemeStyles {
    pub background: &'static str,
    pub text: &'static str,
    pub font: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
    pub grid_surface: &'static str,
    pub status_card: &'static str,
    pub action_primary: &'static str,
    pub action_secondary: &'static str,
    pub traitor_overlay: &'static str,
    pub items: ItemRules,
}

impl ThemeStyles {
    #[must_use]
    pub const fn rule_for(&self, target: StyleTarget) -> &'static str {
        match target {
            StyleTarget::Role(ContainerRole::Background) => self.background,
            StyleTarget::Role(ContainerRole::Text) => self.text,
            StyleTarget::Role(ContainerRole::Font) => self.font,
            StyleTarget::Role(ContainerRole::Accent) => self.accent,
            StyleTarget::Role(ContainerRole::Danger) => self.danger,
            StyleTarget::Role(ContainerRole::GridSurface) => self.grid_surface,
            StyleTarget::Role(ContainerRole::StatusCard) => self.status_card,
            StyleTarget::Role(ContainerRole::ActionPrimary) => self.action_primary,
            StyleTarget::Role(ContainerRole::ActionSecondary) => self.action_secondary,
            StyleTarget::Role(ContainerRole::TraitorOverlay) => self.traitor_overlay,
            StyleTarget::Category(category) => self.items.for_category(category),
        }
    }
}

/// Resolve the style rule for a theme and target. Total over both closed
/// enumerations by construction; [`ensure_registry_valid`] additionally
/// rejects empty rules at startup.
#[must_use]
pub fn resolve(theme: Theme, target: StyleTarget) -> &'static str {
    theme.styles().rule_for(target)
}

static REGISTRY_CHECK: Lazy<Result<(), ThemeError>> = Lazy::new(|| {
    for theme in Theme::ALL {
        for target in StyleTarget::all() {
            if resolve(theme, target).trim().is_empty() {
                return Err(ThemeError::MissingRule { theme, target });
            }
        }
    }
    Ok(())
});

/// Check once that every (theme, target) pair resolves to a non-empty rule.
///
/// # Errors
///
/// Returns [`ThemeError::MissingRule`] for the first empty rule found.
pub fn ensure_registry_valid() -> Result<(), ThemeError> {
    REGISTRY_CHECK.clone()
}

static CURSED: ThemeStyles = ThemeStyles {
    background: "bg-[#1e293b]",
    text: "text-[#fef3c7]",
    font: "font-cursed",
    accent: "bg-[#f59e0b]",
    danger: "bg-[#ef4444]",
    grid_surface: "bg-[#4a3627]",
    status_card: "bg-[#4a3627] border-2 border-[#f59e0b]",
    action_primary: "bg-[#f59e0b] text-[#4a3627] shadow-[4px_4px_0_rgba(0,0,0,0.5)] border-2 border-[#4a3627]",
    action_secondary: "bg-[#4a3627] text-[#fef3c7] border-2 border-[#f59e0b]",
    traitor_overlay: "bg-black/80 backdrop-sepia",
    items: ItemRules {
        weapon: "bg-stone-600 border-stone-800 shadow-md rounded-sm",
        potion: "bg-red-900/80 border-red-950 backdrop-blur-sm rounded-full",
        scroll: "bg-amber-100 text-amber-900 border-amber-300 transform rotate-1 rounded-sm",
        junk: "bg-stone-500 border-stone-700 grayscale rounded-sm",
        tech: "bg-teal-900/80 border-teal-950 shadow-inner rounded-sm",
        relic: "bg-purple-950/80 border-purple-900 shadow-inner rounded-sm",
    },
};

static CYBER: ThemeStyles = ThemeStyles {
    background: "bg-[#0f172a]",
    text: "text-[#10b981]",
    font: "font-cyber",
    accent: "bg-[#ec4899]",
    danger: "bg-[#ef4444]",
    grid_surface: "bg-[#1e293b] border border-[#10b981]/20",
    status_card: "bg-[#0f172a]/80 border border-[#10b981] shadow-[0_0_15px_rgba(16,185,129,0.2)]",
    action_primary: "bg-transparent border border-[#10b981] text-[#10b981] hover:bg-[#10b981]/10 shadow-[0_0_10px_#10b981]",
    action_secondary: "bg-transparent border border-[#ec4899] text-[#ec4899] hover:bg-[#ec4899]/10",
    traitor_overlay: "bg-red-900/20 backdrop-blur-md border-2 border-red-500 animate-pulse",
    items: ItemRules {
        weapon: "bg-[#10b981]/20 border border-[#10b981] shadow-[0_0_10px_#10b981]",
        potion: "bg-[#ec4899]/20 border border-[#ec4899] shadow-[0_0_10px_#ec4899]",
        scroll: "bg-cyan-500/20 border border-cyan-500 shadow-[0_0_10px_cyan]",
        junk: "bg-slate-700/50 border border-slate-600 opacity-50",
        tech: "bg-violet-500/20 border border-violet-500 shadow-[0_0_10px_violet]",
        relic: "bg-amber-400/20 border border-amber-400 shadow-[0_0_10px_gold]",
    },
};

static ARCTIC: ThemeStyles = ThemeStyles {
    background: "bg-[#f8fafc]",
    text: "text-[#0f172a]",
    font: "font-arctic",
    accent: "bg-[#3b82f6]",
    danger: "bg-[#ef4444]",
    grid_surface: "bg-white border border-slate-200 shadow-sm",
    status_card: "bg-white border border-slate-100",
    action_primary: "bg-black text-white hover:bg-slate-800",
    action_secondary: "bg-slate-100 text-slate-900",
    traitor_overlay: "bg-white/90 backdrop-grayscale",
    items: ItemRules {
        weapon: "bg-slate-100 border border-slate-300 text-slate-600 hover:bg-slate-50 transition-colors",
        potion: "bg-red-50 border border-red-100 text-red-600",
        scroll: "bg-amber-50 border border-amber-100 text-amber-600",
        junk: "bg-gray-200 text-gray-400",
        tech: "bg-blue-50 border border-blue-100 text-blue-600",
        relic: "bg-violet-50 border border-violet-100 text-violet-600",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_wire_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{theme}\""));
        }
        assert_eq!(
            "Cursed".parse::<Theme>(),
            Err(ThemeError::UnknownTheme(String::from("Cursed")))
        );
    }

    #[test]
    fn registry_is_total_and_non_empty() {
        assert_eq!(ensure_registry_valid(), Ok(()));
        assert_eq!(StyleTarget::all().count(), 16);
    }

    #[test]
    fn resolve_matches_bundle_fields() {
        assert_eq!(
            resolve(Theme::Cursed, StyleTarget::Role(ContainerRole::Background)),
            "bg-[#1e293b]"
        );
        assert_eq!(
            resolve(Theme::Cyber, StyleTarget::Category(Category::Junk)),
            "bg-slate-700/50 border border-slate-600 opacity-50"
        );
        assert_eq!(
            resolve(Theme::Arctic, StyleTarget::Role(ContainerRole::TraitorOverlay)),
            "bg-white/90 backdrop-grayscale"
        );
    }
}
