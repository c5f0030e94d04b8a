//! Game card shown in listing grids.

use arena_core::card::GameCardView;
use arena_core::model::GameSummary;
use dioxus::prelude::*;

/// Render one game. `on_play` receives the game id once per click.
#[component]
pub fn GameCard(game: GameSummary, on_play: EventHandler<String>) -> Element {
    let view = GameCardView::from(&game);
    let id = view.id.clone();

    rsx! {
        div { class: "game-card",
            img {
                class: "game-card-thumbnail",
                src: "{view.thumbnail}",
                alt: "{view.title}",
            }
            div { class: "game-card-body",
                h3 { class: "game-card-title", "{view.title}" }
                if !view.genre.is_empty() {
                    span { class: "game-card-genre", "{view.genre_label()}" }
                }
                div { class: "game-card-rating", "{view.rating_label()}" }
                button {
                    class: "btn btn-primary game-card-play",
                    onclick: move |_| on_play.call(id.clone()),
                    "Play"
                }
            }
        }
    }
}
