//! Async driver for the listing flow.
//!
//! Lives in the client crate because it operates purely on
//! [`ListingController`] and a [`GameSource`]; no UI framework dependency.
//! Frontends feed it a stream of [`ListingCommand`]s and receive state
//! snapshots through a callback.

use arena_core::listing::{Applied, FetchTicket, ListingCommand, ListingController, ListingState};
use arena_core::source::{FetchError, GameSource, ListingPage};
use futures_util::stream::{FuturesUnordered, Stream, StreamExt};

/// Run one fetch and tag the outcome with its ticket's sequence number.
async fn fetch<S: GameSource>(
    source: &S,
    ticket: FetchTicket,
) -> (u64, Result<ListingPage, FetchError>) {
    let result = source.list_games(&ticket.params).await;
    (ticket.seq, result)
}

/// Drive a listing view until `commands` ends.
///
/// Dispatches the initial fetch immediately, then multiplexes user commands
/// with in-flight fetches. Several fetches may be outstanding at once; they
/// are never cancelled, and the controller discards every result except the
/// one from the most recent dispatch. `publish` is called with the new state
/// after every visible change.
///
/// Once the command stream closes the remaining fetches are settled and the
/// function returns.
pub async fn run_listing<S, C, F>(
    source: &S,
    ctrl: &mut ListingController,
    mut commands: C,
    mut publish: F,
) where
    S: GameSource,
    C: Stream<Item = ListingCommand> + Unpin,
    F: FnMut(&ListingState),
{
    let mut in_flight = FuturesUnordered::new();
    in_flight.push(fetch(source, ctrl.refresh()));
    publish(&ctrl.state);

    let mut commands_open = true;
    loop {
        tokio::select! {
            Some((seq, result)) = in_flight.next(), if !in_flight.is_empty() => {
                match ctrl.apply(seq, result) {
                    Applied::Stale => continue,
                    Applied::Refetch(ticket) => in_flight.push(fetch(source, ticket)),
                    Applied::Updated | Applied::Failed => {}
                }
                publish(&ctrl.state);
            }
            command = commands.next(), if commands_open => {
                match command {
                    Some(command) => {
                        if let Some(ticket) = ctrl.handle(command) {
                            in_flight.push(fetch(source, ticket));
                        }
                        publish(&ctrl.state);
                    }
                    None => commands_open = false,
                }
            }
            else => break,
        }
    }
    tracing::debug!(seq = ctrl.latest_seq(), "listing session finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use arena_core::catalog::{Catalog, MockGameSource};
    use arena_core::listing::{FilterKey, ListingStatus};
    use arena_core::model::GameDetails;
    use arena_core::protocol::ListGamesParams;
    use futures_util::stream;

    /// Unfiltered requests are slow, filtered ones answer at once.
    struct SlowUnfiltered(Catalog);

    impl GameSource for SlowUnfiltered {
        async fn list_games(&self, params: &ListGamesParams) -> Result<ListingPage, FetchError> {
            if params.genre.is_none() {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            Ok(self.0.query(params))
        }

        async fn game_details(&self, id: &str) -> Result<Option<GameDetails>, FetchError> {
            Ok(self.0.details(id))
        }
    }

    #[tokio::test]
    async fn slow_earlier_fetch_never_overwrites_newer_result() {
        let source = SlowUnfiltered(Catalog::demo());
        let mut ctrl = ListingController::new();
        let commands = stream::iter(vec![ListingCommand::SetFilter {
            key: FilterKey::Genre,
            value: "rpg".to_string(),
        }]);
        let mut snapshots = Vec::new();

        run_listing(&source, &mut ctrl, commands, |s| snapshots.push(s.clone())).await;

        assert!(ctrl.state.items.iter().all(|g| g.genre == "rpg"));
        assert_eq!(ctrl.state.items.len(), 4);
        assert_eq!(ctrl.state.total_pages, 1);
        assert!(!ctrl.state.loading);

        assert_eq!(snapshots[0].status(), ListingStatus::Loading);
        // The slow unfiltered page (12 items) was never published.
        assert!(snapshots.iter().all(|s| s.items.len() != 12));
        assert_eq!(snapshots.last(), Some(&ctrl.state));
    }

    #[tokio::test]
    async fn pages_forward_through_the_catalog() {
        let source = MockGameSource::new(Catalog::demo());
        let mut ctrl = ListingController::new();

        // The first command arrives before the initial load settles, so
        // paging is clamped against the one-page default and dispatches
        // nothing; drive the initial load first.
        run_listing(&source, &mut ctrl, stream::empty(), |_| {}).await;
        assert_eq!(ctrl.state.total_pages, 3);

        let commands = stream::iter(vec![ListingCommand::NextPage, ListingCommand::NextPage]);
        run_listing(&source, &mut ctrl, commands, |_| {}).await;

        assert_eq!(ctrl.state.query.page, 3);
        assert_eq!(ctrl.state.items.len(), 6);
        let pagination = ctrl.state.pagination().unwrap();
        assert!(pagination.next_disabled);
        assert!(!pagination.prev_disabled);
    }

    #[tokio::test]
    async fn failure_surfaces_error_and_clears_loading() {
        let source = MockGameSource::failing("catalog offline");
        let mut ctrl = ListingController::new();

        run_listing(&source, &mut ctrl, stream::empty(), |_| {}).await;

        assert_eq!(ctrl.state.status(), ListingStatus::Error);
        assert_eq!(ctrl.state.error.as_deref(), Some("catalog offline"));
        assert!(ctrl.state.items.is_empty());
        assert!(!ctrl.state.loading);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_state() {
        let source = MockGameSource::new(Catalog::default());
        let mut ctrl = ListingController::new();

        run_listing(&source, &mut ctrl, stream::empty(), |_| {}).await;

        assert_eq!(ctrl.state.status(), ListingStatus::Empty);
        assert_eq!(ctrl.state.pagination(), None);
    }
}
