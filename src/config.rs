//! Configuration module

use std::env;

use crate::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Base URL of the prediction service
    pub prediction_api_url: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: constants::DEFAULT_PORT,
            prediction_api_url: constants::DEFAULT_PREDICTION_API_URL.to_string(),
            environment: constants::DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(constants::DEFAULT_PORT),

            prediction_api_url: env::var("PREDICTION_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| constants::DEFAULT_PREDICTION_API_URL.to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| constants::DEFAULT_ENVIRONMENT.to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.prediction_api_url, "http://localhost:5000");
        assert!(!config.is_production());
    }
}
