pub mod battle;
pub mod combined;
pub mod info;
pub mod inventory;
