pub mod header;
pub mod icon;
pub mod traitor_overlay;
pub mod ui;
