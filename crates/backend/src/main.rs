pub mod shared;

use axum::body::Body;
use axum::extract::State;
use axum::handler::Handler;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{middleware, routing::get, Router};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Last path segment carries an extension, e.g. `/sports.csv`
fn is_asset_path(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

/// Client routes get `index.html`; a missing asset stays a 404.
async fn route_fallback(State(index): State<PathBuf>, req: Request<Body>) -> Response {
    if is_asset_path(req.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    match ServeFile::new(index).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Static files from `static_dir`; extension-less paths get `index.html` so
/// the client-side router can resolve them.
fn build_router(static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir)
        .fallback(route_fallback.with_state(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(spa)
        .layer(middleware::from_fn(shared::request_logger::request_logger))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_dir = Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let static_dir = config.server.static_path();
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html, build the frontend with `trunk build` first",
            static_dir.display()
        );
    }

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Serving {} on http://{}", static_dir.display(), addr);

    axum::serve(listener, build_router(&static_dir)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_with_index() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        dir
    }

    async fn send_get(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[test]
    fn test_is_asset_path() {
        assert!(is_asset_path("/sports.csv"));
        assert!(is_asset_path("/product-categories/sports.csv"));
        assert!(!is_asset_path("/product-categories"));
        assert!(!is_asset_path("/"));
    }

    #[tokio::test]
    async fn test_missing_csv_is_not_found() {
        let dist = dist_with_index();
        let response = send_get(build_router(dist.path()), "/sports.csv").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let nested = send_get(build_router(dist.path()), "/product-categories/sports.csv").await;
        assert_eq!(nested.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_existing_csv_is_served() {
        let dist = dist_with_index();
        std::fs::write(dist.path().join("sports.csv"), "Category,Vendor\n").unwrap();
        let response = send_get(build_router(dist.path()), "/sports.csv").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_client_route_gets_index_html() {
        let dist = dist_with_index();
        let response = send_get(build_router(dist.path()), "/product-categories").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_health() {
        let dist = dist_with_index();
        let response = send_get(build_router(dist.path()), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
