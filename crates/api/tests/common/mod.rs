#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use waitline_api::config::{ServerConfig, WindowPolicy};
use waitline_api::routes;
use waitline_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        windows: WindowPolicy::default(),
    }
}

pub fn test_state(pool: PgPool) -> AppState {
    AppState::new(pool, test_config())
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = test_state(pool);

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn organization(pool: &PgPool) -> i64 {
    sqlx::query_scalar("INSERT INTO organizations (name) VALUES ('Faculty of Science') RETURNING id")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A service whose window contains the current instant under both the
/// absolute and the daily reading.
pub async fn open_service(pool: &PgPool, org: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO services (organization_id, name, opens_at, closes_at) \
         VALUES ($1, $2, NOW() - INTERVAL '1 hour', NOW() + INTERVAL '1 hour') RETURNING id",
    )
    .bind(org)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// A service whose window excludes the current instant under both readings.
pub async fn closed_service(pool: &PgPool, org: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO services (organization_id, name, opens_at, closes_at) \
         VALUES ($1, $2, NOW() + INTERVAL '2 hours', NOW() + INTERVAL '3 hours') RETURNING id",
    )
    .bind(org)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// A service open now by time of day, but whose dates lie in the past: open
/// under the daily reading, closed under the absolute one.
pub async fn recurring_service(pool: &PgPool, org: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO services (organization_id, name, opens_at, closes_at) \
         VALUES ($1, $2, NOW() - INTERVAL '30 days 1 hour', NOW() - INTERVAL '29 days 23 hours') \
         RETURNING id",
    )
    .bind(org)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn group(pool: &PgPool, org: i64, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO groups (organization_id, name) VALUES ($1, $2) RETURNING id")
        .bind(org)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn client(pool: &PgPool, org: i64, registration_id: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO clients (organization_id, registration_id, name) \
         VALUES ($1, $2, $2) RETURNING id",
    )
    .bind(org)
    .bind(registration_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn add_to_group(pool: &PgPool, client_id: i64, group_id: i64) {
    sqlx::query("INSERT INTO client_groups (client_id, group_id) VALUES ($1, $2)")
        .bind(client_id)
        .bind(group_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn queue(pool: &PgPool, org: i64, service_id: i64, name: &str, priority: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO queues (organization_id, service_id, name, priority) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(org)
    .bind(service_id)
    .bind(name)
    .bind(priority)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn attach_group(pool: &PgPool, queue_id: i64, group_id: i64) {
    sqlx::query("INSERT INTO queue_groups (queue_id, group_id) VALUES ($1, $2)")
        .bind(queue_id)
        .bind(group_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn desk(pool: &PgPool, org: i64, attendant_id: Option<i64>, services: &[i64]) -> i64 {
    let desk_id: i64 = sqlx::query_scalar(
        "INSERT INTO desks (organization_id, name, attendant_id) \
         VALUES ($1, 'Desk 1', $2) RETURNING id",
    )
    .bind(org)
    .bind(attendant_id)
    .fetch_one(pool)
    .await
    .unwrap();
    for &service_id in services {
        sqlx::query("INSERT INTO desk_services (desk_id, service_id) VALUES ($1, $2)")
            .bind(desk_id)
            .bind(service_id)
            .execute(pool)
            .await
            .unwrap();
    }
    desk_id
}

/// Insert a waiting entry with a controlled arrival time (`secs_ago` seconds
/// before now).
pub async fn enqueue_at(pool: &PgPool, client_id: i64, queue_id: i64, secs_ago: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO queue_entries (client_id, queue_id, enqueued_at) \
         VALUES ($1, $2, NOW() - make_interval(secs => $3)) RETURNING id",
    )
    .bind(client_id)
    .bind(queue_id)
    .bind(secs_ago as f64)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn entry_count_for_client(pool: &PgPool, client_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM queue_entries WHERE client_id = $1")
        .bind(client_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
