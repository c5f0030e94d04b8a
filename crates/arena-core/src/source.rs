//! Data source abstraction for game listings.
//!
//! Decouples the listing flow from any specific transport (HTTP, in-memory
//! fixture, etc.). The listing session driver only depends on the
//! [`GameSource`] trait.

use std::future::Future;

use thiserror::Error;

use crate::model::{GameDetails, GameSummary};
use crate::protocol::ListGamesParams;

/// Message shown when a failure carries no usable text of its own.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch games";

/// Errors that can occur while querying a [`GameSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request failed; carries a human-readable message.
    #[error("{0}")]
    FetchFailed(String),
}

impl FetchError {
    /// Build a failure, substituting [`DEFAULT_FETCH_ERROR`] for a blank
    /// message.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::FetchFailed(DEFAULT_FETCH_ERROR.to_string())
        } else {
            Self::FetchFailed(message)
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::FetchFailed(message) => message,
        }
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub items: Vec<GameSummary>,
    /// Always at least 1.
    pub total_pages: u32,
}

/// Read access to the game catalog.
///
/// Futures are not required to be `Send` so that browser implementations
/// can hold JS handles across await points.
pub trait GameSource {
    /// Fetch one page of games matching `params`.
    fn list_games(
        &self,
        params: &ListGamesParams,
    ) -> impl Future<Output = Result<ListingPage, FetchError>>;

    /// Fetch the detail record for one game. `Ok(None)` means the game does
    /// not exist.
    fn game_details(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<GameDetails>, FetchError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_messages_fall_back_to_default() {
        assert_eq!(FetchError::failed("").message(), DEFAULT_FETCH_ERROR);
        assert_eq!(FetchError::failed("   ").message(), DEFAULT_FETCH_ERROR);
        assert_eq!(FetchError::failed("timeout").to_string(), "timeout");
    }
}
