use serde::{Deserialize, Serialize};
use std::fmt;

/// One game as shown in a listing grid.
///
/// Read-only once received from the data source. The optional fields may be
/// missing on the wire; [`crate::card::GameCardView`] fills in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub thumbnail_url: Option<String>,
    pub average_rating: Option<f64>,
    pub total_reviews: Option<u32>,
}

/// The genres offered by the discover page filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Action,
    Adventure,
    Puzzle,
    Rpg,
    Sports,
    Strategy,
    Other,
}

impl Genre {
    /// Every genre in the order the filter lists them.
    pub const ALL: [Genre; 7] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Puzzle,
        Genre::Rpg,
        Genre::Sports,
        Genre::Strategy,
        Genre::Other,
    ];

    /// Wire value, as sent in the `genre` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Adventure => "adventure",
            Genre::Puzzle => "puzzle",
            Genre::Rpg => "rpg",
            Genre::Sports => "sports",
            Genre::Strategy => "strategy",
            Genre::Other => "other",
        }
    }

    /// Human-readable label for UI display.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Puzzle => "Puzzle",
            Genre::Rpg => "RPG",
            Genre::Sports => "Sports",
            Genre::Strategy => "Strategy",
            Genre::Other => "Other",
        }
    }

    /// Look up a genre by its wire value.
    pub fn parse(value: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Developer credited on a game detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub username: String,
    pub name: String,
    pub avatar: String,
}

/// Full record behind the game detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rating: f64,
    pub developer: Developer,
    pub cover_image: String,
}

/// A submission waiting for moderation on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGame {
    pub id: u32,
    pub name: String,
    pub developer: String,
    pub uploaded: String,
    pub thumbnail: String,
}

/// Semantic category of a toast notification. The UI layer decides how to
/// style each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// A dismissible, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    /// Shown on the home page after any Logout button.
    pub fn logged_out() -> Self {
        Self::success("Logged out successfully!")
    }
}
