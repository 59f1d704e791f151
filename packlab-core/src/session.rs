//! Scene selection and the single session-state object.
//!
//! The session has exactly one writer (the top-level application
//! controller); everything else reads snapshots. All transitions are
//! explicit named calls, and each axis — theme, scene, traitor alert —
//! moves independently of the others.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, Item};
use crate::query::Selection;
use crate::theme::Theme;

/// The mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scene {
    #[default]
    Inventory,
    Battle,
    Combined,
    Info,
}

impl Scene {
    pub const ALL: [Self; 4] = [Self::Inventory, Self::Battle, Self::Combined, Self::Info];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inventory => "INVENTORY",
            Self::Battle => "BATTLE",
            Self::Combined => "COMBINED",
            Self::Info => "INFO",
        }
    }

    /// Label for the scene tabs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inventory => "Inventory",
            Self::Battle => "Battle",
            Self::Combined => "Combined",
            Self::Info => "Item Info",
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scene {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INVENTORY" => Ok(Self::Inventory),
            "BATTLE" => Ok(Self::Battle),
            "COMBINED" => Ok(Self::Combined),
            "INFO" => Ok(Self::Info),
            _ => Err(()),
        }
    }
}

/// Complete session state. Copy-cheap so views can hold plain snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Session {
    pub theme: Theme,
    pub scene: Scene,
    pub traitor_alert: bool,
    inspected: Option<&'static str>,
}

impl Session {
    /// Start a session from the selection parsed out of the URL.
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        let mut session = Self {
            theme: selection.theme,
            ..Self::default()
        };
        session.set_scene(selection.scene);
        session
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        Selection {
            theme: self.theme,
            scene: self.scene,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Switch scenes. Entering [`Scene::Info`] with no prior inspection
    /// seeds the inspected item from the catalog head; any previous
    /// inspection is preserved across scene changes.
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
        if scene == Scene::Info && self.inspected.is_none() {
            self.inspected = catalog::CATALOG.first().map(|item| item.id);
        }
    }

    pub fn toggle_traitor(&mut self) {
        self.traitor_alert = !self.traitor_alert;
    }

    /// Select an item for the INFO scene. Unknown ids are ignored.
    pub fn inspect(&mut self, id: &str) {
        if let Some(item) = catalog::item_by_id(id) {
            self.inspected = Some(item.id);
        }
    }

    #[must_use]
    pub fn inspected_item(&self) -> Option<&'static Item> {
        self.inspected.and_then(catalog::item_by_id)
    }
}
