//! Root application component for the web frontend.
//!
//! Provides the API client and the cross-navigation notice to every page
//! and mounts the router. The API is
//! expected on the same origin the page was served from, which is how
//! `arena-server` deploys the bundle.

use arena_client::http_source::HttpGameSource;
use arena_ui::{Flash, Route};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!(
    "/assets/main.css",
    AssetOptions::css()
        .with_preload(true)
        .with_static_head(true)
);

/// Origin of the page, e.g. `https://arena.example.com`.
fn default_api_origin() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_default();
    let host = location.host().unwrap_or_default();
    format!("{protocol}//{host}")
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| HttpGameSource::new(default_api_origin()));
    use_context_provider(|| Flash(Signal::new(None)));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "CyberArena" }
        document::Meta { name: "theme-color", content: "#0a0a14" }
        Router::<Route> {}
    }
}
