mod admin;
mod discover;
mod game_detail;
mod home;
mod not_found;
mod profile;

pub use admin::Admin;
pub use discover::Discover;
pub use game_detail::GameDetail;
pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;
