//! Creator Platform Backend
//!
//! A headless state backend for the AI Creator Platform frontend: one
//! authoritative in-memory store with revisioned snapshots, a JSON API
//! mirroring the frontend contract, and durable user preferences.

mod api;
mod auth;
mod config;
mod errors;
mod generate;
mod models;
mod persist;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use persist::JsonFilePrefs;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
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

    tracing::info!("Starting Creator Platform Backend");
    tracing::info!("State path: {:?}", config.state_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (CREATOR_API_PSK). Authentication is disabled!");
    }

    // Seed the store from the persisted preference file
    let prefs = Arc::new(JsonFilePrefs::new(&config.state_path));
    let store = Arc::new(Store::new(prefs));

    // Log state transitions for debugging
    let mut changes = store.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let revision = changes.borrow_and_update().revision;
            tracing::debug!("State changed to revision {}", revision);
        }
    });

    // Create application state
    let state = AppState {
        store,
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

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // State
        .route("/state", get(api::get_state))
        .route("/state/revision", get(api::get_revision))
        // UI
        .route("/ui/theme/toggle", post(api::toggle_theme))
        .route("/ui/sidebar", put(api::update_sidebar))
        .route("/ui/modals/close-all", post(api::close_all_modals))
        .route("/ui/modals/{name}/open", post(api::open_modal))
        .route("/ui/modals/{name}/close", post(api::close_modal))
        // Notifications
        .route("/notifications", get(api::list_notifications))
        .route("/notifications", post(api::create_notification))
        .route("/notifications", delete(api::clear_notifications))
        .route("/notifications/{id}", delete(api::remove_notification))
        // Session
        .route("/auth/login", post(api::login))
        .route("/auth/register", post(api::register))
        .route("/auth/logout", post(api::logout))
        .route("/auth/profile", get(api::profile))
        // Ideas
        .route("/ideas", get(api::list_ideas))
        .route("/ideas", post(api::create_idea))
        .route("/ideas/{id}/vote", post(api::vote_idea))
        .route("/ideas/{id}/comments", post(api::comment_idea))
        // Courses
        .route("/courses", get(api::list_courses))
        .route("/courses", post(api::create_course))
        .route("/courses/{id}", put(api::update_course))
        // Webinars
        .route("/webinars", get(api::list_webinars))
        .route("/webinars", post(api::create_webinar))
        .route("/webinars/{id}/register", post(api::register_webinar))
        // Community
        .route("/community/posts", get(api::list_posts))
        .route("/community/posts", post(api::create_post))
        .route("/community/posts/{id}/like", post(api::like_post))
        .route("/community/posts/{id}/comments", post(api::comment_post))
        // Analytics
        .route("/analytics", get(api::get_analytics))
        .route("/analytics", patch(api::update_analytics))
        .route("/analytics/report", get(api::analytics_report))
        // Generation
        .route("/generate/course-outline", post(api::generate_course_outline))
        .route("/generate/webinar-agenda", post(api::generate_webinar_agenda))
        .route("/generate/branding-kit", post(api::generate_branding_kit))
        .route("/generate/automation-task", post(api::generate_automation_task))
        .route("/generate/idea-suggestions", post(api::generate_idea_suggestions))
        .route("/generate/community-post", post(api::generate_community_post))
        // Marketplace
        .route("/marketplace", get(api::list_products))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

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
