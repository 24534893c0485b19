use serde::Serialize;
use serde_json::Value;

use super::extension::Extension;
use super::policy::DynamicPolicy;
use crate::error::{SdkError, SdkResult};

/// A share request: what to ask for and where to send the user afterwards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicScenario {
    callback_endpoint: String,
    policy: DynamicPolicy,
    extensions: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<Value>,
}

impl DynamicScenario {
    /// Where the user lands after sharing
    #[must_use]
    pub fn callback_endpoint(&self) -> &str {
        &self.callback_endpoint
    }

    #[must_use]
    pub const fn policy(&self) -> &DynamicPolicy {
        &self.policy
    }

    #[must_use]
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }
}

/// Builds a [`DynamicScenario`]
#[derive(Debug, Clone, Default)]
pub struct DynamicScenarioBuilder {
    callback_endpoint: Option<String>,
    policy: Option<DynamicPolicy>,
    extensions: Vec<Extension>,
    subject: Option<Value>,
}

impl DynamicScenarioBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path the user is redirected to once the share completes
    #[must_use]
    pub fn with_callback_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.callback_endpoint = Some(endpoint.into());
        self
    }

    /// Attributes and authentication the share asks for
    #[must_use]
    pub fn with_policy(mut self, policy: DynamicPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Appends an extension; extensions keep their insertion order
    #[must_use]
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Opaque description of who the share is about
    #[must_use]
    pub fn with_subject(mut self, subject: Value) -> Self {
        self.subject = Some(subject);
        self
    }

    /// # Errors
    /// Returns `SdkError::MissingField` if the callback endpoint or policy is unset
    pub fn build(self) -> SdkResult<DynamicScenario> {
        let callback_endpoint = self
            .callback_endpoint
            .ok_or(SdkError::MissingField("callback_endpoint"))?;
        let policy = self.policy.ok_or(SdkError::MissingField("policy"))?;

        Ok(DynamicScenario {
            callback_endpoint,
            policy,
            extensions: self.extensions,
            subject: self.subject,
        })
    }
}
