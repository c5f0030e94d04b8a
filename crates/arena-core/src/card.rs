//! Display model for a game card.

use crate::model::{GameSummary, Genre};

/// Image shown when a game has no thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder-game.png";

/// Everything a game card renders, with defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GameCardView {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub thumbnail: String,
    pub average_rating: f64,
    pub total_reviews: u32,
}

impl GameCardView {
    /// Genre label for known genres, the raw value otherwise.
    pub fn genre_label(&self) -> String {
        Genre::parse(&self.genre)
            .map(|g| g.label().to_string())
            .unwrap_or_else(|| self.genre.clone())
    }

    pub fn rating_label(&self) -> String {
        format!("★ {:.1} ({} reviews)", self.average_rating, self.total_reviews)
    }
}

impl From<&GameSummary> for GameCardView {
    fn from(game: &GameSummary) -> Self {
        Self {
            id: game.id.clone(),
            title: game.title.clone(),
            genre: game.genre.clone(),
            thumbnail: game
                .thumbnail_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
            average_rating: game.average_rating.unwrap_or(0.0),
            total_reviews: game.total_reviews.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let game = GameSummary {
            id: "g1".to_string(),
            title: "Pixel Adventure".to_string(),
            genre: "adventure".to_string(),
            thumbnail_url: None,
            average_rating: None,
            total_reviews: None,
        };
        let view = GameCardView::from(&game);
        assert_eq!(view.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(view.average_rating, 0.0);
        assert_eq!(view.total_reviews, 0);
        assert_eq!(view.genre_label(), "Adventure");
        assert_eq!(view.rating_label(), "★ 0.0 (0 reviews)");
    }

    #[test]
    fn empty_thumbnail_is_treated_as_missing() {
        let game = GameSummary {
            id: "g2".to_string(),
            title: "Retro Racing 3d".to_string(),
            genre: "racing".to_string(),
            thumbnail_url: Some(String::new()),
            average_rating: Some(3.76),
            total_reviews: Some(12),
        };
        let view = GameCardView::from(&game);
        assert_eq!(view.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(view.genre_label(), "racing");
        assert_eq!(view.rating_label(), "★ 3.8 (12 reviews)");
    }
}
