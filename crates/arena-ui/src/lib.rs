//! Shared Dioxus UI for the CyberArena front-end.
//!
//! This crate is platform-agnostic: it provides the reusable components,
//! the page views and the [`Route`] table. Platform crates (`arena-web`)
//! mount the router and provide an [`ApiClient`] and a [`Flash`] through
//! context.

pub mod app_logic;
pub mod components;
pub mod pages;

use arena_core::model::Notice;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use pages::{Admin, Discover, GameDetail, Home, NotFound, Profile};

/// The data source every page reads from, provided as context by the
/// platform crate.
pub type ApiClient = arena_client::http_source::HttpGameSource;

/// A notice that survives one navigation, e.g. the logout confirmation
/// shown on the page the user lands on. Provided as context by the
/// platform crate.
#[derive(Clone, Copy)]
pub struct Flash(pub Signal<Option<Notice>>);

impl Flash {
    /// Log out: leave the confirmation for the home page and go there.
    pub fn logout(mut self, navigator: Navigator) {
        self.0.set(Some(Notice::logged_out()));
        navigator.push(Route::Home {});
    }

    pub fn dismiss(mut self) {
        self.0.set(None);
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/gaming")]
    Discover {},
    #[route("/game/:id")]
    GameDetail { id: String },
    #[route("/profile")]
    Profile {},
    #[route("/admin")]
    Admin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_site_paths() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!("/gaming".parse::<Route>().unwrap(), Route::Discover {});
        assert_eq!(
            "/game/game-007".parse::<Route>().unwrap(),
            Route::GameDetail {
                id: "game-007".to_string()
            }
        );
        assert!(matches!(
            "/no/such/page".parse::<Route>().unwrap(),
            Route::NotFound { .. }
        ));
    }

    #[test]
    fn detail_links_render_their_id() {
        let route = Route::GameDetail {
            id: "game-001".to_string(),
        };
        assert_eq!(route.to_string(), "/game/game-001");
    }
}
