pub mod footer;
pub mod game_card;
pub mod header;
pub mod loader;
pub mod pagination;
pub mod toast;
