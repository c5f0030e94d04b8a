//! Discover page: genre/keyword filters, game grid and pagination.
//!
//! All listing logic lives in [`arena_core::listing`]; this component only
//! renders the [`ListingState`] signal and forwards clicks to the listing
//! coroutine.

use arena_core::listing::{FilterKey, ListingCommand, ListingQuery, ListingState, ListingStatus};
use arena_core::model::{Genre, Notice};
use dioxus::prelude::*;

use crate::app_logic::run_listing_session;
use crate::components::footer::Footer;
use crate::components::game_card::GameCard;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::pagination::Pagination;
use crate::components::toast::Toast;
use crate::{ApiClient, Route};

#[component]
pub fn Discover() -> Element {
    let source = use_context::<ApiClient>();
    let listing = use_signal(|| ListingState::initial(ListingQuery::default()));
    let navigator = use_navigator();

    let coroutine = use_coroutine(move |rx: UnboundedReceiver<ListingCommand>| {
        run_listing_session(rx, listing, source.clone())
    });

    let state = listing.read();
    if state.is_initial_load() {
        return rsx! {
            Loader { fullscreen: true }
        };
    }

    let genre = state.query.genre.clone();
    let keyword = state.query.keyword.clone();

    rsx! {
        div { class: "cyber-page",
            Header { show_user_icon: true }
            div { class: "page-content-wrapper",
                div { class: "discover-container",
                    div { class: "discover-heading",
                        h1 { class: "gradient-title", "Discover Games" }
                        p { class: "subtitle", "Explore our collection of amazing games" }
                    }

                    // Filters
                    div { class: "filter-bar",
                        select {
                            class: "cyber-input",
                            value: "{genre}",
                            onchange: move |e| {
                                coroutine.send(ListingCommand::SetFilter {
                                    key: FilterKey::Genre,
                                    value: e.value(),
                                });
                            },
                            option { value: "", "All genres" }
                            for g in Genre::ALL {
                                option { value: g.as_str(), selected: genre == g.as_str(), "{g}" }
                            }
                        }
                        input {
                            class: "cyber-input",
                            r#type: "search",
                            placeholder: "Search by title",
                            value: "{keyword}",
                            oninput: move |e| {
                                coroutine.send(ListingCommand::SetFilter {
                                    key: FilterKey::Keyword,
                                    value: e.value(),
                                });
                            },
                        }
                    }

                    match state.status() {
                        ListingStatus::Loading => rsx! {
                            div { class: "centered-block",
                                Loader {}
                            }
                        },
                        _ if state.items.is_empty() => rsx! {
                            div { class: "centered-block",
                                h2 { "No games found" }
                                p { class: "subtitle", "Try adjusting your filters or check back later" }
                            }
                        },
                        _ => rsx! {
                            div { class: "game-grid",
                                for game in state.items.iter() {
                                    GameCard {
                                        key: "{game.id}",
                                        game: game.clone(),
                                        on_play: move |id: String| {
                                            navigator.push(Route::GameDetail { id });
                                        },
                                    }
                                }
                            }
                            if let Some(view) = state.pagination() {
                                Pagination {
                                    view,
                                    on_prev: move |_| coroutine.send(ListingCommand::PrevPage),
                                    on_next: move |_| coroutine.send(ListingCommand::NextPage),
                                }
                            }
                        },
                    }

                    if let Some(message) = state.error.clone() {
                        Toast {
                            notice: Notice::error(message),
                            on_close: move |_| coroutine.send(ListingCommand::DismissError),
                            on_retry: move |_| coroutine.send(ListingCommand::Retry),
                        }
                    }
                }
            }
            Footer {}
        }
    }
}
