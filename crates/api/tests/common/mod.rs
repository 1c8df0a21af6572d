#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use marquee_core::movie::{default_movies, Movie};
use marquee_store::{InMemoryMovieStore, MovieCatalog};
use tower::ServiceExt;

use marquee_api::config::{ServerConfig, StorageBackend, StorageConfig};
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin and a 30-second request
/// timeout. Storage settings are unused by the router itself.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from("."),
            data_file: "movies.json".to_string(),
            seed_file: PathBuf::from("movies.seed.json"),
        },
    }
}

/// Build the full application router around `catalog`, with the same
/// middleware stack production uses.
pub fn build_test_app(catalog: Arc<MovieCatalog>) -> Router {
    let state = AppState { catalog };
    build_app_router(state, &test_config())
}

/// A catalog in memory holding `movies`.
pub fn memory_catalog(movies: Vec<Movie>) -> Arc<MovieCatalog> {
    Arc::new(MovieCatalog::new(InMemoryMovieStore::with_movies(movies)))
}

/// A catalog seeded with the five default movies.
pub fn seeded_catalog() -> Arc<MovieCatalog> {
    memory_catalog(default_movies())
}

/// A valid movie request body.
pub fn movie_body(title: &str, director: &str, rating: f64) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "director": director,
        "year": 2001,
        "rating": rating
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
