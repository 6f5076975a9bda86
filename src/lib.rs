//! Core Clarity Dashboard
//!
//! Nuclear-plant risk simulation dashboard. Scenarios are built from a
//! manual form or a tier-biased random generator, submitted to an external
//! prediction service, and the returned assessment is rendered.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        CORE CLARITY                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌─────────────┐   ┌──────────────────────┐ │
//! │  │  Scenario  │──▶│  Session    │──▶│  View (JSON / HTML)  │ │
//! │  │  Builders  │   │  (busy gate)│   │                      │ │
//! │  └────────────┘   └──────┬──────┘   └──────────────────────┘ │
//! │                          ▼                                   │
//! │                  ┌───────────────┐                           │
//! │                  │ Prediction    │── POST /api/predict ──▶   │
//! │                  │ Client        │                           │
//! │                  └───────────────┘                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod constants;
pub mod config;
pub mod error;
pub mod models;
pub mod client;
pub mod generator;
pub mod session;
pub mod view;
pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

use client::{PredictionClient, PredictionConfig};
use session::DashboardSession;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub client: PredictionClient,
    pub session: Arc<DashboardSession>,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        let client = PredictionClient::new(PredictionConfig {
            base_url: config.prediction_api_url.clone(),
        });

        Self {
            config,
            client,
            session: Arc::new(DashboardSession::new()),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/backend/health", get(handlers::health::backend))
        .route("/api/model-info", get(handlers::model::info))
        .route("/api/scenario/default", get(handlers::scenario::default_scenario))
        .route("/api/scenario/random", get(handlers::scenario::random_scenario))
        .route("/api/simulate", post(handlers::simulation::manual))
        .route("/api/simulate/random", post(handlers::simulation::random))
        .route("/api/dashboard", get(handlers::dashboard::view));

    Router::new()
        .route("/", get(handlers::dashboard::page))
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
