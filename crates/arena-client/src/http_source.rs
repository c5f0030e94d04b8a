//! HTTP implementation of [`GameSource`].
//!
//! Talks to the API described in [`arena_core::protocol`]. Works natively
//! and in the browser: `reqwest` compiles to `fetch` on WASM, which is why
//! the futures here are not `Send`-bound.

use arena_core::model::GameDetails;
use arena_core::protocol::{ListGamesParams, ListGamesResponse, parse_error_message, parse_list_response};
use arena_core::source::{DEFAULT_FETCH_ERROR, FetchError, GameSource, ListingPage};
use reqwest::{StatusCode, Url};

/// A [`GameSource`] backed by the CyberArena HTTP API.
#[derive(Debug, Clone)]
pub struct HttpGameSource {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for HttpGameSource {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl HttpGameSource {
    /// `base_url` is the API origin, e.g. `http://127.0.0.1:8080`. A
    /// trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn games_url(&self) -> Result<Url, FetchError> {
        Url::parse(&format!("{}/api/games", self.base_url))
            .map_err(|e| FetchError::failed(format!("Invalid API address: {e}")))
    }

    fn game_url(&self, id: &str) -> Result<Url, FetchError> {
        let mut url = self.games_url()?;
        url.path_segments_mut()
            .map_err(|()| FetchError::failed("Invalid API address"))?
            .push(id);
        Ok(url)
    }
}

impl GameSource for HttpGameSource {
    async fn list_games(&self, params: &ListGamesParams) -> Result<ListingPage, FetchError> {
        let url = self.games_url()?;
        tracing::debug!(%url, page = params.page, "GET games");

        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        parse_list_response(&body)
            .map(ListGamesResponse::into_page)
            .map_err(|e| FetchError::failed(format!("Malformed games response: {e}")))
    }

    async fn game_details(&self, id: &str) -> Result<Option<GameDetails>, FetchError> {
        let url = self.game_url(id)?;
        tracing::debug!(%url, "GET game details");

        let response = self.http.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        serde_json::from_str::<GameDetails>(&body)
            .map(Some)
            .map_err(|e| FetchError::failed(format!("Malformed game response: {e}")))
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    tracing::warn!(error = %err, "request failed");
    FetchError::failed(err.to_string())
}

fn status_error(status: StatusCode, body: &str) -> FetchError {
    tracing::warn!(%status, "API returned an error status");
    FetchError::failed(parse_error_message(body).unwrap_or_else(|| DEFAULT_FETCH_ERROR.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use arena_core::catalog::Catalog;
    use arena_core::protocol::ErrorBody;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use axum::{Json, Router};

    /// Serve a small stand-in API on an ephemeral port and return its origin.
    async fn spawn_api(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    fn catalog_router() -> Router {
        Router::new()
            .route(
                "/api/games",
                get(|Query(params): Query<ListGamesParams>| async move {
                    Json(ListGamesResponse::from(Catalog::demo().query(&params)))
                }),
            )
            .route(
                "/api/games/{id}",
                get(|Path(id): Path<String>| async move {
                    Catalog::demo()
                        .details(&id)
                        .map(Json)
                        .ok_or(AxumStatus::NOT_FOUND)
                }),
            )
    }

    #[tokio::test]
    async fn lists_games_with_filters() {
        let source = HttpGameSource::new(spawn_api(catalog_router()).await);
        assert!(!source.base_url().ends_with('/'));

        let page = source
            .list_games(&ListGamesParams {
                page: 1,
                limit: 12,
                genre: Some("action".to_string()),
                keyword: Some("blade".to_string()),
            })
            .await
            .unwrap();
        let titles: Vec<&str> = page.items.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Stellar Blade", "Blade Echo"]);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn fetches_details_and_maps_404_to_none() {
        let source = HttpGameSource::new(spawn_api(catalog_router()).await);

        let details = source.game_details("game-001").await.unwrap().unwrap();
        assert_eq!(details.name, "Stellar Blade");

        assert_eq!(source.game_details("game-404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn error_status_surfaces_server_message() {
        let router = Router::new().route(
            "/api/games",
            get(|| async {
                (
                    AxumStatus::SERVICE_UNAVAILABLE,
                    Json(ErrorBody {
                        message: "catalog is being reindexed".to_string(),
                    }),
                )
            }),
        );
        let source = HttpGameSource::new(spawn_api(router).await);
        let err = source
            .list_games(&ListGamesParams {
                page: 1,
                limit: 12,
                genre: None,
                keyword: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "catalog is being reindexed");
    }

    #[tokio::test]
    async fn error_status_without_body_uses_default_message() {
        let router = Router::new().route("/api/games", get(|| async { AxumStatus::BAD_GATEWAY }));
        let source = HttpGameSource::new(spawn_api(router).await);
        let err = source
            .list_games(&ListGamesParams {
                page: 1,
                limit: 12,
                genre: None,
                keyword: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), DEFAULT_FETCH_ERROR);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_fetch_failure() {
        // Nothing listens on port 9 of localhost in the test environment.
        let source = HttpGameSource::new("http://127.0.0.1:9");
        let result = source
            .list_games(&ListGamesParams {
                page: 1,
                limit: 12,
                genre: None,
                keyword: None,
            })
            .await;
        assert!(matches!(result, Err(FetchError::FetchFailed(_))));
    }
}
