//! Client orchestrator. Connects the listing session, the HTTP source and
//! the TUI frontend.
//!
//! The listing session ([`arena_client::session::run_listing`]) and the UI
//! loop run side by side in one task: the UI sends [`ListingCommand`]s over
//! a channel and re-renders whenever the session publishes a new state.

use arena_client::http_source::HttpGameSource;
use arena_client::session;
use arena_core::listing::{ListingCommand, ListingController, ListingQuery, ListingState};
use arena_core::model::Genre;
use arena_core::source::GameSource;
use futures_util::stream;
use tokio::sync::{mpsc, watch};

use crate::tui::{Tui, UserIntent};

/// Start the browser against `server_url`, optionally pre-filtered.
pub async fn start_client(
    server_url: &str,
    genre: Option<String>,
    keyword: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let genre = match genre {
        Some(g) => match Genre::parse(&g.to_lowercase()) {
            Some(genre) => genre.as_str().to_string(),
            None => return Err(format!("Unknown genre '{g}'").into()),
        },
        None => String::new(),
    };
    let query = ListingQuery {
        genre,
        keyword: keyword.unwrap_or_default(),
        ..ListingQuery::default()
    };

    let source = HttpGameSource::new(server_url);
    let mut ctrl = ListingController::with_query(query);

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<ListingCommand>();
    // Loading until the session publishes its first state.
    let (state_tx, mut state_rx) =
        watch::channel(ListingState::initial(ctrl.state.query.clone()));
    let commands = Box::pin(stream::unfold(cmd_rx, |mut rx| async move {
        rx.recv().await.map(|command| (command, rx))
    }));

    let mut tui = Tui::setup()?;
    let result = {
        let listing = session::run_listing(&source, &mut ctrl, commands, |state| {
            let _ = state_tx.send(state.clone());
        });
        let ui = run_event_loop(&mut tui, &source, &mut state_rx, cmd_tx);

        // The UI owns the command sender, so it always finishes first.
        tokio::select! {
            result = ui => result,
            () = listing => Ok(()),
        }
    };
    tui.teardown()?;
    result
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

async fn run_event_loop(
    tui: &mut Tui,
    source: &HttpGameSource,
    state_rx: &mut watch::Receiver<ListingState>,
    cmd_tx: mpsc::UnboundedSender<ListingCommand>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let state = state_rx.borrow_and_update().clone();
        tui.render(&state)?;

        let timeout = tokio::time::Duration::from_millis(50);

        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }

            _ = tokio::time::sleep(timeout) => {
                match tui.poll_and_handle_input(&state)? {
                    UserIntent::Quit => break,
                    UserIntent::Send(command) => {
                        if cmd_tx.send(command).is_err() {
                            break;
                        }
                    }
                    UserIntent::ShowDetails(id) => {
                        let details = source.game_details(&id).await;
                        tui.show_details(details);
                    }
                    UserIntent::None => {}
                }
            }
        }
    }

    Ok(())
}
