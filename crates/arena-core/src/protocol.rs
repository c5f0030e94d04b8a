//! HTTP wire format shared by the mock API server and the HTTP client.
//!
//! | Method | Path               | Body                          |
//! |--------|--------------------|-------------------------------|
//! | `GET`  | `/api/games`       | [`ListGamesResponse`]         |
//! | `GET`  | `/api/games/{id}`  | [`GameDetails`](crate::model::GameDetails) |
//!
//! Non-2xx responses carry an [`ErrorBody`].

use serde::{Deserialize, Serialize};

use crate::model::GameSummary;
use crate::source::ListingPage;

/// Query parameters of `GET /api/games`.
///
/// `genre` and `keyword` are omitted entirely when no filter is active;
/// an empty string is never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGamesParams {
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// Image reference attached to a game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub url: String,
}

/// A game as it appears in the `data` array of [`ListGamesResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
}

impl From<GameRecord> for GameSummary {
    fn from(record: GameRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            genre: record.genre,
            thumbnail_url: record.avatar.map(|a| a.url),
            average_rating: record.average_rating,
            total_reviews: record.total_reviews,
        }
    }
}

impl From<GameSummary> for GameRecord {
    fn from(game: GameSummary) -> Self {
        Self {
            id: game.id,
            title: game.title,
            genre: game.genre,
            avatar: game.thumbnail_url.map(|url| Avatar { url }),
            average_rating: game.average_rating,
            total_reviews: game.total_reviews,
        }
    }
}

/// Body of `GET /api/games`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGamesResponse {
    #[serde(default)]
    pub data: Vec<GameRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl ListGamesResponse {
    /// Convert into a [`ListingPage`]. A missing `data` array reads as no
    /// games and a missing or zero `totalPages` reads as one page.
    pub fn into_page(self) -> ListingPage {
        ListingPage {
            items: self.data.into_iter().map(GameSummary::from).collect(),
            total_pages: self.total_pages.unwrap_or(1).max(1),
        }
    }
}

impl From<ListingPage> for ListGamesResponse {
    fn from(page: ListingPage) -> Self {
        Self {
            data: page.items.into_iter().map(GameRecord::from).collect(),
            total_pages: Some(page.total_pages),
        }
    }
}

/// Error payload of any non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Try to deserialize a raw response body as a [`ListGamesResponse`].
pub fn parse_list_response(body: &str) -> Result<ListGamesResponse, serde_json::Error> {
    serde_json::from_str(body.trim())
}

/// Pull the `message` out of an error body, if the body is one.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body.trim())
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_omit_empty_filters() {
        let params = ListGamesParams {
            page: 1,
            limit: 12,
            genre: None,
            keyword: None,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({ "page": 1, "limit": 12 }));
    }

    #[test]
    fn response_with_missing_fields_defaults() {
        let body = r#"{ "data": [ { "_id": "g1", "title": "Shadow Realms" } ] }"#;
        let page = parse_list_response(body).unwrap().into_page();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 1);
        let game = &page.items[0];
        assert_eq!(game.id, "g1");
        assert_eq!(game.genre, "");
        assert_eq!(game.thumbnail_url, None);
        assert_eq!(game.average_rating, None);
        assert_eq!(game.total_reviews, None);
    }

    #[test]
    fn response_reads_nested_avatar_and_camel_case() {
        let body = r#"{
            "data": [{
                "_id": "g2",
                "title": "Mystic Quest",
                "genre": "rpg",
                "avatar": { "url": "https://cdn.example/mq.png" },
                "averageRating": 4.2,
                "totalReviews": 88
            }],
            "totalPages": 3
        }"#;
        let page = parse_list_response(body).unwrap().into_page();
        assert_eq!(page.total_pages, 3);
        let game = &page.items[0];
        assert_eq!(game.thumbnail_url.as_deref(), Some("https://cdn.example/mq.png"));
        assert_eq!(game.average_rating, Some(4.2));
        assert_eq!(game.total_reviews, Some(88));
    }

    #[test]
    fn zero_total_pages_reads_as_one() {
        let page = parse_list_response(r#"{ "totalPages": 0 }"#)
            .unwrap()
            .into_page();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn error_message_extraction() {
        assert_eq!(
            parse_error_message(r#"{ "message": "database offline" }"#).as_deref(),
            Some("database offline")
        );
        assert_eq!(parse_error_message(r#"{ "message": "" }"#), None);
        assert_eq!(parse_error_message("<html>502</html>"), None);
    }
}
