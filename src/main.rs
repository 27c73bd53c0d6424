//! Pulse Backend
//!
//! REST backend for the Pulse crowdsourced market research platform: topics
//! move from submission through approval, community voting, qualification,
//! and conversion into funded research projects.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod workflow;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pulse Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Default vote threshold: {}", config.default_vote_threshold);

    // Warn if admin PSK is not configured
    if config.admin_psk.is_none() {
        tracing::warn!("No admin PSK configured (PULSE_ADMIN_PSK). Admin routes are unprotected!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the admin auth layer
    let psk = state.config.admin_psk.clone();

    // Admin routes behind the PSK layer
    let admin_routes = Router::new()
        .route("/topics/{id}/approve", post(api::approve_topic))
        .route("/topics/{id}/reject", post(api::reject_topic))
        .route("/topics/{id}/convert", post(api::convert_to_research))
        .route("/topics/{id}/complete", post(api::complete_topic))
        .route("/topics/bulk-approve", post(api::bulk_approve))
        .route("/topics/bulk-reject", post(api::bulk_reject))
        .route("/topics/bulk-delete", post(api::bulk_delete))
        .route("/topics/process-deadlines", post(api::process_deadlines))
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(psk.clone(), req, next)
        }));

    // Public API routes (caller identity via x-user-id)
    let api_routes = Router::new()
        // Topics
        .route("/topics", get(api::list_topics))
        .route("/topics", post(api::submit_topic))
        .route("/topics/{id}", get(api::get_topic))
        .route("/topics/{id}/research", get(api::get_topic_research))
        // Voting
        .route("/topics/{id}/vote", get(api::my_vote))
        .route("/topics/{id}/vote", post(api::vote))
        .route("/topics/{id}/vote", delete(api::unvote))
        // Notifications
        .route("/notifications", get(api::list_notifications))
        .nest("/admin", admin_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
