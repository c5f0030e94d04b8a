pub mod admin;
pub mod card;
pub mod catalog;
pub mod listing;
pub mod model;
pub mod profile;
pub mod protocol;
pub mod source;
