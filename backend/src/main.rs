//! Maize Yield Predictor - Backend Server
//!
//! Serves maize yield predictions from a pre-trained regression model
//! to the farm-details form. The model artifact is loaded once at
//! startup and shared read-only across requests.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod model;
mod routes;
mod services;

pub use config::Config;

use model::YieldModel;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<YieldModel>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "myp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Maize Yield Predictor Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the model artifact. This is the only external resource; the
    // server refuses to start without it.
    tracing::info!("Loading yield model from {}", config.model.path);
    let model = YieldModel::load(&config.model.path)?;
    tracing::info!(
        "Loaded model {} ({} trees)",
        model.version(),
        model.tree_count()
    );

    // Create application state
    let state = AppState {
        model: Arc::new(model),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(liveness))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Maize Yield Predictor API v1.0"
}

/// Liveness endpoint
async fn liveness() -> &'static str {
    "OK"
}
