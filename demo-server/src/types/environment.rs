//! Deployment stage of the demo server

use std::env;

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Local development
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable,
    /// defaulting to development
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub const fn json_logs(self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}
