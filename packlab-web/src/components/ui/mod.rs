pub mod action_bar;
pub mod battle_log;
pub mod inventory_grid;
pub mod item_info;
pub mod status_card;
