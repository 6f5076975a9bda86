//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults and fixed API paths.

/// Default prediction service URL
///
/// Fallback when `PREDICTION_API_URL` is not set.
pub const DEFAULT_PREDICTION_API_URL: &str = "http://localhost:5000";

/// Default dashboard port
pub const DEFAULT_PORT: u16 = 8080;

/// Default environment name
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Prediction endpoint path
pub const PREDICT_PATH: &str = "/api/predict";

/// Health endpoint path
pub const HEALTH_PATH: &str = "/health";

/// Model info endpoint path
pub const MODEL_INFO_PATH: &str = "/api/model-info";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Core Clarity";

// ============================================
// Presentation thresholds (display hints only)
// ============================================

/// Core temperature above which the reading is flagged
pub const HIGH_CORE_TEMP_C: f64 = 320.0;

/// Coolant pressure above which the reading is flagged
pub const HIGH_COOLANT_PRESSURE_BAR: f64 = 180.0;

/// Cyber attack score above which the reading is flagged
pub const HIGH_CYBER_ATTACK_SCORE: f64 = 7.0;

/// Seismic index above which the reading is flagged
pub const HIGH_SEISMIC_ACTIVITY: f64 = 7.0;
