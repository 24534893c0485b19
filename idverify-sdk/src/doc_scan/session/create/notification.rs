use serde::Serialize;

use crate::doc_scan::constants::{
    CHECK_COMPLETION, RESOURCE_UPDATE, SESSION_COMPLETION, TASK_COMPLETION,
};
use crate::error::{SdkError, SdkResult};

/// Where and when the API should call back about session progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationConfig {
    endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    topics: Vec<String>,
}

impl NotificationConfig {
    /// Callback endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Topics notified
    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}

/// Builds a [`NotificationConfig`]
#[derive(Debug, Clone, Default)]
pub struct NotificationConfigBuilder {
    endpoint: Option<String>,
    auth_token: Option<String>,
    topics: Vec<String>,
}

impl NotificationConfigBuilder {
    /// Creates the builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Token sent back in the callback's `Authorization` header
    #[must_use]
    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    /// Notify on resource updates
    #[must_use]
    pub fn for_resource_update(self) -> Self {
        self.with_topic(RESOURCE_UPDATE)
    }

    /// Notify when a task completes
    #[must_use]
    pub fn for_task_completion(self) -> Self {
        self.with_topic(TASK_COMPLETION)
    }

    /// Notify when a check completes
    #[must_use]
    pub fn for_check_completion(self) -> Self {
        self.with_topic(CHECK_COMPLETION)
    }

    /// Notify when the session completes
    #[must_use]
    pub fn for_session_completion(self) -> Self {
        self.with_topic(SESSION_COMPLETION)
    }

    /// Adds a topic; duplicates are ignored
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        if !self.topics.contains(&topic) {
            self.topics.push(topic);
        }
        self
    }

    /// Builds the configuration
    ///
    /// # Errors
    /// Returns `SdkError::MissingField` if no endpoint was set
    pub fn build(self) -> SdkResult<NotificationConfig> {
        let endpoint = self.endpoint.ok_or(SdkError::MissingField("endpoint"))?;

        Ok(NotificationConfig {
            endpoint,
            auth_token: self.auth_token,
            topics: self.topics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topics_are_deduplicated() {
        let config = NotificationConfigBuilder::new()
            .with_endpoint("https://example.com/callback")
            .for_session_completion()
            .for_check_completion()
            .for_session_completion()
            .build()
            .unwrap();

        assert_eq!(config.topics(), ["SESSION_COMPLETION", "CHECK_COMPLETION"]);
    }

    #[test]
    fn test_serialization() {
        let config = NotificationConfigBuilder::new()
            .with_endpoint("https://example.com/callback")
            .with_auth_token("token")
            .for_resource_update()
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(config).unwrap(),
            json!({
                "endpoint": "https://example.com/callback",
                "auth_token": "token",
                "topics": ["RESOURCE_UPDATE"]
            })
        );
    }

    #[test]
    fn test_endpoint_is_required() {
        let result = NotificationConfigBuilder::new().for_task_completion().build();
        assert!(matches!(result, Err(SdkError::MissingField("endpoint"))));
    }
}
