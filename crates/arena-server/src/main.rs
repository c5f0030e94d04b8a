//! Mock CyberArena API server.
//!
//! # Routes
//!
//! | Method | Path              | Description                              |
//! |--------|-------------------|------------------------------------------|
//! | `GET`  | `/`               | Serve static web frontend (Dioxus build) |
//! | `GET`  | `/api/games`      | Paginated, filtered game listing (JSON)  |
//! | `GET`  | `/api/games/{id}` | Details of one game, `404` if unknown    |
//!
//! Set `STATIC_DIR` to point at the Dioxus web build output (default: `./dist`)
//! and `PORT` to change the listening port (default: `8080`).

mod api;

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use arena_core::catalog::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialise tracing (respects RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("server stopped: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let catalog = Arc::new(Catalog::demo());
    tracing::info!("Loaded {} games into the catalog", catalog.len());

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string());

    // Static files first, index.html for client-side routes.
    let serve_spa = ServeDir::new(&static_dir)
        .not_found_service(ServeFile::new(format!("{static_dir}/index.html")));

    let app = api::router(catalog)
        .layer(CorsLayer::permissive())
        .fallback_service(serve_spa);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("CyberArena API listening on {addr}");
    tracing::info!("Serving static files from {static_dir}");

    axum::serve(listener, app).await?;
    Ok(())
}
