//! Demo application settings read from the environment

use std::env;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_PORT: u16 = 9443;
const DEFAULT_STATIC_DIR: &str = "static";

/// Credentials and locations the demo needs at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    client_sdk_id: String,
    scenario_id: String,
    key_file_path: PathBuf,
    port: u16,
    static_dir: PathBuf,
}

impl DemoConfig {
    /// Builds a config directly, mainly for tests
    #[must_use]
    pub fn new(
        client_sdk_id: impl Into<String>,
        scenario_id: impl Into<String>,
        key_file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client_sdk_id: client_sdk_id.into(),
            scenario_id: scenario_id.into(),
            key_file_path: key_file_path.into(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Reads `IDVERIFY_CLIENT_SDK_ID`, `IDVERIFY_SCENARIO_ID`, `IDVERIFY_KEY_FILE_PATH`,
    /// `PORT` and `STATIC_DIR`
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or `PORT` is not a
    /// valid port number
    pub fn from_env() -> anyhow::Result<Self> {
        let client_sdk_id =
            env::var("IDVERIFY_CLIENT_SDK_ID").context("IDVERIFY_CLIENT_SDK_ID is not set")?;
        let scenario_id = env::var("IDVERIFY_SCENARIO_ID").context("IDVERIFY_SCENARIO_ID is not set")?;
        let key_file_path =
            env::var("IDVERIFY_KEY_FILE_PATH").context("IDVERIFY_KEY_FILE_PATH is not set")?;

        let port = env::var("PORT")
            .map_or(Ok(DEFAULT_PORT), |p| p.parse())
            .context("PORT is not a valid port number")?;
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            client_sdk_id,
            scenario_id,
            key_file_path: key_file_path.into(),
            port,
            static_dir: static_dir.into(),
        })
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    #[must_use]
    pub fn client_sdk_id(&self) -> &str {
        &self.client_sdk_id
    }

    #[must_use]
    pub fn scenario_id(&self) -> &str {
        &self.scenario_id
    }

    /// Path of the PEM private key
    #[must_use]
    pub const fn key_file_path(&self) -> &PathBuf {
        &self.key_file_path
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Directory served under `/static` and used for saved media
    #[must_use]
    pub const fn static_dir(&self) -> &PathBuf {
        &self.static_dir
    }

    /// Public base URL of this server
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://localhost:{}", self.port)
    }
}
