//! In-memory game catalog used as a fixture.
//!
//! Backs the mock API server and [`MockGameSource`], and applies the same
//! filtering and pagination rules a real backend would: exact genre match,
//! case-insensitive keyword match on the title, 1-based pages.

use std::cell::Cell;

use crate::model::{Developer, GameDetails, GameSummary, Genre};
use crate::protocol::ListGamesParams;
use crate::source::{FetchError, GameSource, ListingPage};

/// One catalog row: the listing summary plus detail-page fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub summary: GameSummary,
    pub description: String,
    pub developer: Developer,
}

impl CatalogEntry {
    pub fn details(&self) -> GameDetails {
        GameDetails {
            id: self.summary.id.clone(),
            name: self.summary.title.clone(),
            description: self.description.clone(),
            rating: self.summary.average_rating.unwrap_or(0.0),
            developer: self.developer.clone(),
            cover_image: self.summary.thumbnail_url.clone().unwrap_or_else(|| {
                format!(
                    "https://via.placeholder.com/300x400/8a2be2/ffffff?text={}",
                    self.summary.title.replace(' ', "+")
                )
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The demo catalog: 30 games spread over every genre.
    pub fn demo() -> Self {
        const ROWS: [(&str, Genre, &str, &str); 30] = [
            ("Stellar Blade", Genre::Action, "xx_player_001", "Vinayak Agrawal"),
            ("Shadow Realms", Genre::Adventure, "pixelforge", "PixelForge Studios"),
            ("Retro Racing 3d", Genre::Sports, "indiepixel", "IndiePixel Studios"),
            ("Mystic Quest", Genre::Rpg, "lunagames", "Luna Games"),
            ("Pixel Adventure", Genre::Adventure, "retrosoft", "RetroSoft Games"),
            ("Neon Drift", Genre::Sports, "indiepixel", "IndiePixel Studios"),
            ("Circuit Breaker", Genre::Puzzle, "boltworks", "Boltworks"),
            ("Iron Dominion", Genre::Strategy, "ironforge", "Ironforge Interactive"),
            ("Void Runner", Genre::Action, "xx_player_001", "Vinayak Agrawal"),
            ("Chrono Tactics", Genre::Strategy, "lunagames", "Luna Games"),
            ("Glyph Garden", Genre::Puzzle, "quietcraft", "Quietcraft"),
            ("Dragon's Ledger", Genre::Rpg, "pixelforge", "PixelForge Studios"),
            ("Hoop City", Genre::Sports, "courtside", "Courtside Games"),
            ("Sky Pirates", Genre::Adventure, "retrosoft", "RetroSoft Games"),
            ("Cyber Siege", Genre::Action, "boltworks", "Boltworks"),
            ("Lantern Keep", Genre::Rpg, "quietcraft", "Quietcraft"),
            ("Tile Cascade", Genre::Puzzle, "boltworks", "Boltworks"),
            ("Frontier Colony", Genre::Strategy, "ironforge", "Ironforge Interactive"),
            ("Goal Rush", Genre::Sports, "courtside", "Courtside Games"),
            ("Ember Legion", Genre::Action, "ironforge", "Ironforge Interactive"),
            ("Sunken Archive", Genre::Adventure, "lunagames", "Luna Games"),
            ("Starforge Saga", Genre::Rpg, "xx_player_001", "Vinayak Agrawal"),
            ("Quantum Knots", Genre::Puzzle, "quietcraft", "Quietcraft"),
            ("Warden Protocol", Genre::Strategy, "pixelforge", "PixelForge Studios"),
            ("Desk Garden", Genre::Other, "quietcraft", "Quietcraft"),
            ("Synth Beats", Genre::Other, "courtside", "Courtside Games"),
            ("Blade Echo", Genre::Action, "retrosoft", "RetroSoft Games"),
            ("Mythic Shores", Genre::Adventure, "indiepixel", "IndiePixel Studios"),
            ("Rune Tactics", Genre::Strategy, "lunagames", "Luna Games"),
            ("Orbit Golf", Genre::Sports, "boltworks", "Boltworks"),
        ];

        let entries = ROWS
            .iter()
            .enumerate()
            .map(|(i, (title, genre, username, name))| {
                let n = i as u32 + 1;
                CatalogEntry {
                    summary: GameSummary {
                        id: format!("game-{n:03}"),
                        title: (*title).to_string(),
                        genre: genre.as_str().to_string(),
                        // Every fifth game ships without artwork or reviews.
                        thumbnail_url: (n % 5 != 0)
                            .then(|| format!("/covers/game-{n:03}.png")),
                        average_rating: (n % 5 != 0).then(|| f64::from(30 + (n * 7) % 21) / 10.0),
                        total_reviews: (n % 5 != 0).then_some(n * 13 % 200),
                    },
                    description: format!(
                        "{title} is a {} game. Complete each level to unlock the next!",
                        genre.label().to_lowercase()
                    ),
                    developer: Developer {
                        username: (*username).to_string(),
                        name: (*name).to_string(),
                        avatar: "👤".to_string(),
                    },
                }
            })
            .collect();

        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One page of games matching `params`. Pages past the end are empty.
    pub fn query(&self, params: &ListGamesParams) -> ListingPage {
        let keyword = params
            .keyword
            .as_deref()
            .map(str::to_lowercase)
            .filter(|k| !k.is_empty());
        let genre = params.genre.as_deref().filter(|g| !g.is_empty());

        let matching: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|e| genre.is_none_or(|g| e.summary.genre == g))
            .filter(|e| {
                keyword
                    .as_deref()
                    .is_none_or(|k| e.summary.title.to_lowercase().contains(k))
            })
            .collect();

        let limit = params.limit.max(1) as usize;
        let total_pages = matching.len().div_ceil(limit).max(1) as u32;
        let start = (params.page.max(1) as usize - 1).saturating_mul(limit);

        ListingPage {
            items: matching
                .into_iter()
                .skip(start)
                .take(limit)
                .map(|e| e.summary.clone())
                .collect(),
            total_pages,
        }
    }

    pub fn details(&self, id: &str) -> Option<GameDetails> {
        self.entries
            .iter()
            .find(|e| e.summary.id == id)
            .map(CatalogEntry::details)
    }
}

// ---------------------------------------------------------------------------
// Mock source
// ---------------------------------------------------------------------------

/// A [`GameSource`] answering straight from a [`Catalog`].
///
/// Can be told to fail so error paths are testable without a network.
#[derive(Debug, Default)]
pub struct MockGameSource {
    catalog: Catalog,
    failure: Option<String>,
    calls: Cell<usize>,
}

impl MockGameSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            failure: None,
            calls: Cell::new(0),
        }
    }

    /// A source whose every request fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn check(&self) -> Result<(), FetchError> {
        self.calls.set(self.calls.get() + 1);
        match &self.failure {
            Some(message) => Err(FetchError::failed(message.clone())),
            None => Ok(()),
        }
    }
}

impl GameSource for MockGameSource {
    async fn list_games(&self, params: &ListGamesParams) -> Result<ListingPage, FetchError> {
        self.check()?;
        Ok(self.catalog.query(params))
    }

    async fn game_details(&self, id: &str) -> Result<Option<GameDetails>, FetchError> {
        self.check()?;
        Ok(self.catalog.details(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, genre: Option<&str>, keyword: Option<&str>) -> ListGamesParams {
        ListGamesParams {
            page,
            limit: 12,
            genre: genre.map(str::to_string),
            keyword: keyword.map(str::to_string),
        }
    }

    #[test]
    fn demo_catalog_spans_three_pages() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 30);

        let first = catalog.query(&params(1, None, None));
        assert_eq!(first.items.len(), 12);
        assert_eq!(first.total_pages, 3);

        let last = catalog.query(&params(3, None, None));
        assert_eq!(last.items.len(), 6);

        let past_end = catalog.query(&params(9, None, None));
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total_pages, 3);
    }

    #[test]
    fn genre_and_keyword_filters_combine() {
        let catalog = Catalog::demo();

        let rpg = catalog.query(&params(1, Some("rpg"), None));
        assert!(!rpg.items.is_empty());
        assert!(rpg.items.iter().all(|g| g.genre == "rpg"));
        assert_eq!(rpg.total_pages, 1);

        let blades = catalog.query(&params(1, None, Some("BLADE")));
        let titles: Vec<&str> = blades.items.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Stellar Blade", "Blade Echo"]);

        let both = catalog.query(&params(1, Some("action"), Some("blade")));
        assert_eq!(both.items.len(), 2);

        let none = catalog.query(&params(1, Some("rpg"), Some("blade")));
        assert!(none.items.is_empty());
        assert_eq!(none.total_pages, 1);
    }

    #[test]
    fn unknown_genre_matches_nothing() {
        let page = Catalog::demo().query(&params(1, Some("racing"), None));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn zero_limit_and_page_are_treated_as_one() {
        let page = Catalog::demo().query(&ListGamesParams {
            page: 0,
            limit: 0,
            genre: None,
            keyword: None,
        });
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 30);
    }

    #[test]
    fn some_demo_games_lack_artwork() {
        let catalog = Catalog::demo();
        let fifth = catalog.details("game-005").unwrap();
        assert_eq!(fifth.name, "Pixel Adventure");
        assert!(fifth.cover_image.contains("Pixel+Adventure"));
        assert_eq!(fifth.rating, 0.0);
        assert_eq!(catalog.details("game-999"), None);
    }

    #[test]
    fn mock_source_serves_and_fails() {
        let source = MockGameSource::new(Catalog::demo());
        let page = tokio_test::block_on(source.list_games(&params(2, None, None))).unwrap();
        assert_eq!(page.items[0].id, "game-013");
        let details = tokio_test::block_on(source.game_details("game-001")).unwrap();
        assert_eq!(details.unwrap().developer.username, "xx_player_001");
        assert_eq!(source.calls(), 2);

        let broken = MockGameSource::failing("catalog offline");
        let err = tokio_test::block_on(broken.list_games(&params(1, None, None))).unwrap_err();
        assert_eq!(err, FetchError::FetchFailed("catalog offline".to_string()));
    }
}
