use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of item categories. The wire names (`WEAPON`, `POTION`, ...)
/// are what the query string and the per-theme style tables key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Weapon,
    Potion,
    Scroll,
    Junk,
    Tech,
    Relic,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Weapon,
        Self::Potion,
        Self::Scroll,
        Self::Junk,
        Self::Tech,
        Self::Relic,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weapon => "WEAPON",
            Self::Potion => "POTION",
            Self::Scroll => "SCROLL",
            Self::Junk => "JUNK",
            Self::Tech => "TECH",
            Self::Relic => "RELIC",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category identifiers are matched case-sensitively; anything else is a
/// contract violation from the caller, never guessed at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEAPON" => Ok(Self::Weapon),
            "POTION" => Ok(Self::Potion),
            "SCROLL" => Ok(Self::Scroll),
            "JUNK" => Ok(Self::Junk),
            "TECH" => Ok(Self::Tech),
            "RELIC" => Ok(Self::Relic),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Glyph asset keys. Painting the actual artwork is the front end's
/// business; the catalog only names which glyph an item wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconId {
    Sword,
    Activity,
    Flame,
    Shield,
    Chip,
    Gem,
    Skull,
    Eye,
}

/// Width and height of an item in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub w: u8,
    pub h: u8,
}

impl Footprint {
    #[must_use]
    pub const fn new(w: u8, h: u8) -> Self {
        Self { w, h }
    }

    #[must_use]
    pub const fn cells(self) -> u8 {
        self.w * self.h
    }
}

/// One inventory item. Items are authored once, at compile time, and never
/// created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub icon: IconId,
    pub footprint: Footprint,
    pub flavor: &'static str,
}

/// The authored catalog, in placement order. Footprints total 14 cells
/// against the 16-cell grid.
pub const CATALOG: &[Item] = &[
    Item {
        id: "sword",
        name: "Iron Sword",
        category: Category::Weapon,
        icon: IconId::Sword,
        footprint: Footprint::new(1, 3),
        flavor: "Pitted along the edge. Still swings true.",
    },
    Item {
        id: "potion",
        name: "Health Potion",
        category: Category::Potion,
        icon: IconId::Activity,
        footprint: Footprint::new(1, 1),
        flavor: "Smells of copper and cherries. Drink fast.",
    },
    Item {
        id: "scroll",
        name: "Fire Scroll",
        category: Category::Scroll,
        icon: IconId::Flame,
        footprint: Footprint::new(2, 2),
        flavor: "The margins are singed. Read it outdoors.",
    },
    Item {
        id: "junk",
        name: "Heavy Rock",
        category: Category::Junk,
        icon: IconId::Shield,
        footprint: Footprint::new(2, 2),
        flavor: "Somebody packed this on purpose. Trust no one.",
    },
    Item {
        id: "chip",
        name: "Logic Chip",
        category: Category::Tech,
        icon: IconId::Chip,
        footprint: Footprint::new(1, 1),
        flavor: "Blinks twice a second. Nobody knows why.",
    },
    Item {
        id: "relic",
        name: "Pale Idol",
        category: Category::Relic,
        icon: IconId::Gem,
        footprint: Footprint::new(1, 1),
        flavor: "Cold to the touch in every climate.",
    },
];

/// Look an item up by its identity key.
#[must_use]
pub fn item_by_id(id: &str) -> Option<&'static Item> {
    CATALOG.iter().find(|item| item.id == id)
}
