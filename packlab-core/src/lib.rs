//! Packlab Core
//!
//! Platform-agnostic logic for the Packlab theme prototype: the item
//! catalog, first-fit grid layout, the validated theme registry, session
//! state and the query-string codec. No DOM and no wasm dependencies;
//! the web crate renders what this crate computes.

pub mod battle;
pub mod catalog;
pub mod layout;
pub mod query;
pub mod session;
pub mod theme;

// Re-export commonly used types
pub use catalog::{CATALOG, Category, Footprint, IconId, Item, UnknownCategory, item_by_id};
pub use layout::{Cell, GridShape, Layout, LayoutError, Placement, Slot, place};
pub use query::{SCENE_PARAM, Selection, THEME_PARAM};
pub use session::{Scene, Session};
pub use theme::{
    ContainerRole, StyleTarget, Theme, ThemeError, ThemeStyles, ensure_registry_valid, resolve,
};
