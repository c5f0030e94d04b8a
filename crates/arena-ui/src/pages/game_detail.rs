//! Game detail page: cover, description, developer and reviews.

use arena_core::model::GameDetails;
use arena_core::source::GameSource;
use dioxus::prelude::*;

use crate::ApiClient;
use crate::components::footer::Footer;
use crate::components::header::Header;

#[component]
pub fn GameDetail(id: String) -> Element {
    let source = use_context::<ApiClient>();
    // Refetch when the route swaps the id under a mounted page.
    let details = use_resource(use_reactive!(|(id,)| {
        let source = source.clone();
        async move { source.game_details(&id).await }
    }));

    let body = match &*details.read() {
        None => rsx! {
            div { class: "loading-state", "Loading game..." }
        },
        Some(Err(err)) => rsx! {
            div { class: "loading-state",
                p { "{err}" }
                GoBack {}
            }
        },
        Some(Ok(None)) => rsx! {
            div { class: "loading-state",
                p { "Game not found" }
                GoBack {}
            }
        },
        Some(Ok(Some(game))) => rsx! {
            GameInfo { game: game.clone() }
        },
    };

    rsx! {
        div { class: "cyber-page",
            Header { show_user_icon: true }
            {body}
            Footer {}
        }
    }
}

#[component]
fn GoBack() -> Element {
    let navigator = use_navigator();

    rsx! {
        button {
            class: "go-back-btn",
            onclick: move |_| navigator.go_back(),
            span { "←" }
            " Go Back"
        }
    }
}

#[component]
fn GameInfo(game: GameDetails) -> Element {
    let mut liked = use_signal(|| false);
    let mut following = use_signal(|| false);

    rsx! {
        div { class: "page-content-wrapper",
            div { class: "gaming-page-container",
                GoBack {}

                div { class: "gaming-content-grid",
                    // Cover and developer credit
                    div { class: "game-left-panel",
                        div { class: "game-cover-card",
                            img {
                                class: "game-cover-image",
                                src: "{game.cover_image}",
                                alt: "{game.name}",
                            }
                            h2 { class: "game-title-left", "{game.name}" }
                            div { class: "developer-info-left",
                                span { class: "developed-by", "Developed by: " }
                                span { class: "developer-username", "{game.developer.username}" }
                            }
                        }
                    }

                    div { class: "game-right-panel",
                        section { class: "game-info-section",
                            h3 { class: "section-title-uppercase", "GAME INFO" }
                            p { class: "game-description-text", "{game.description}" }
                            div { class: "game-action-buttons",
                                button { class: "rating-btn", "★ Rating ({game.rating})" }
                                button {
                                    class: if liked() { "like-btn active" } else { "like-btn" },
                                    onclick: move |_| liked.toggle(),
                                    if liked() { "❤️ Liked" } else { "🤍 Like" }
                                }
                            }
                        }

                        section { class: "developer-section",
                            h3 { class: "section-title-uppercase", "DEVELOPER" }
                            div { class: "developer-card",
                                div { class: "developer-avatar-large", "{game.developer.avatar}" }
                                div { class: "developer-details",
                                    span { class: "developer-name", "{game.developer.name}" }
                                    button {
                                        class: "follow-btn",
                                        onclick: move |_| following.toggle(),
                                        if following() { "Following" } else { "Follow" }
                                    }
                                }
                            }
                        }

                        section { class: "reviews-section",
                            h3 { class: "section-title-uppercase", "REVIEWS" }
                            div { class: "reviews-stars",
                                for i in 0..5u8 {
                                    span {
                                        key: "{i}",
                                        class: if f64::from(i) < game.rating.round() { "star-filled" } else { "star-outline" },
                                        "★"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
