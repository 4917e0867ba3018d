//! API module
//!
//! Contains HTTP request handlers for folder and note endpoints, the
//! response serializer and the router assembly.

pub mod extract;
pub mod folders;
pub mod middleware;
pub mod notes;
pub mod serializer;

use crate::config::Config;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Uri},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Build the application router
///
/// # Arguments
/// * `state` - Services shared by all handlers
/// * `config` - Supplies the CORS policy and the deployment mode
pub fn router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/folders",
            get(folders::list_folders).post(folders::create_folder),
        )
        .route(
            "/api/folders/:id",
            get(folders::get_folder)
                .patch(folders::update_folder)
                .delete(folders::delete_folder),
        )
        .route(
            "/api/notes",
            get(notes::list_notes).post(notes::create_note),
        )
        .route(
            "/api/notes/:id",
            get(notes::get_note)
                .patch(notes::update_note)
                .delete(notes::delete_note),
        );

    if !config.environment.is_production() {
        app = app.layer(axum::middleware::from_fn(middleware::expose_error_detail));
    }

    for (name, value) in middleware::security_headers() {
        app = app.layer(SetResponseHeaderLayer::if_not_present(name, value));
    }

    let app = app
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(middleware::cors_layer(&config.cors)?)
        .with_state(state);

    Ok(app)
}

/// Location of a newly created resource: the collection path joined with its id
pub fn location(collection: &Uri, id: i64) -> HeaderValue {
    let path = format!("{}/{}", collection.path().trim_end_matches('/'), id);
    HeaderValue::from_str(&path).unwrap_or_else(|_| HeaderValue::from_static("/"))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
