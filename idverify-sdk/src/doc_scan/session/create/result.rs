use serde_json::Value;

use crate::error::{SdkError, SdkResult};
use crate::parse::{require_i64, require_str};

/// Identifiers of a newly created session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSessionResult {
    client_session_token_ttl: i64,
    client_session_token: String,
    session_id: String,
}

impl CreateSessionResult {
    /// Seconds until the client session token expires
    #[must_use]
    pub const fn client_session_token_ttl(&self) -> i64 {
        self.client_session_token_ttl
    }

    /// Token handed to the capture UI
    #[must_use]
    pub fn client_session_token(&self) -> &str {
        &self.client_session_token
    }

    /// Session identifier
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

impl TryFrom<&Value> for CreateSessionResult {
    type Error = SdkError;

    fn try_from(value: &Value) -> SdkResult<Self> {
        Ok(Self {
            client_session_token_ttl: require_i64(value, "client_session_token_ttl")?,
            client_session_token: require_str(value, "client_session_token")?,
            session_id: require_str(value, "session_id")?,
        })
    }
}
