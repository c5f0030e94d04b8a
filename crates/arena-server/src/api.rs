//! JSON handlers for `/api/games`.

use std::sync::Arc;

use arena_core::catalog::Catalog;
use arena_core::model::GameDetails;
use arena_core::protocol::{ErrorBody, ListGamesParams, ListGamesResponse};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

/// Shared application state available to all handlers.
#[derive(Clone)]
struct AppState {
    catalog: Arc<Catalog>,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            message: message.into(),
        }),
    )
}

pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/games", get(list_games))
        .route("/api/games/{id}", get(game_details))
        .with_state(AppState { catalog })
}

/// `GET /api/games?page=&limit=&genre=&keyword=`
async fn list_games(
    State(state): State<AppState>,
    params: Result<Query<ListGamesParams>, QueryRejection>,
) -> Result<Json<ListGamesResponse>, ApiError> {
    let Query(params) = params.map_err(|e| {
        tracing::warn!("rejected listing query: {e}");
        api_error(StatusCode::BAD_REQUEST, e.body_text())
    })?;
    if params.page == 0 || params.limit == 0 {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "page and limit must be at least 1",
        ));
    }

    let page = state.catalog.query(&params);
    tracing::debug!(
        page = params.page,
        genre = ?params.genre,
        keyword = ?params.keyword,
        items = page.items.len(),
        "listing"
    );
    Ok(Json(ListGamesResponse::from(page)))
}

/// `GET /api/games/{id}`
async fn game_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameDetails>, ApiError> {
    state
        .catalog
        .details(&id)
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("Game {id} not found")))
}
