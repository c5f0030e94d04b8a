//! Bridges the framework-agnostic listing session into Dioxus signals.
//!
//! The discover page spawns [`run_listing_session`] as its coroutine;
//! components send [`ListingCommand`]s through the coroutine handle and
//! re-render from the [`ListingState`] signal.

use arena_client::session;
use arena_core::listing::{ListingCommand, ListingController, ListingState};
use arena_core::source::GameSource;
use dioxus::prelude::*;

/// Coroutine body for a listing view. Runs until the view unmounts.
pub async fn run_listing_session<S: GameSource>(
    rx: UnboundedReceiver<ListingCommand>,
    mut listing: Signal<ListingState>,
    source: S,
) {
    let mut ctrl = ListingController::new();
    session::run_listing(&source, &mut ctrl, rx, |state| listing.set(state.clone())).await;
}
