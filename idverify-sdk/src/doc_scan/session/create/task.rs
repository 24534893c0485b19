use serde::Serialize;

use super::check::ManualCheck;
use crate::error::{SdkError, SdkResult};

/// A task to run on submitted resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "config")]
pub enum RequestedTask {
    /// Extract text fields from an identity document
    #[serde(rename = "ID_DOCUMENT_TEXT_DATA_EXTRACTION")]
    TextExtraction(TextExtractionConfig),
}

/// Configuration of [`RequestedTask::TextExtraction`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextExtractionConfig {
    manual_check: ManualCheck,
    #[serde(skip_serializing_if = "Option::is_none")]
    chip_data: Option<String>,
}

/// Builds a [`RequestedTask::TextExtraction`]
#[derive(Debug, Clone, Default)]
pub struct RequestedTextExtractionTaskBuilder {
    manual_check: Option<ManualCheck>,
    chip_data: Option<String>,
}

impl RequestedTextExtractionTaskBuilder {
    /// Creates the builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Always fall back to manual extraction
    #[must_use]
    pub fn with_manual_check_always(self) -> Self {
        self.with_manual_check(ManualCheck::Always)
    }

    /// Fall back to manual extraction when automation fails
    #[must_use]
    pub fn with_manual_check_fallback(self) -> Self {
        self.with_manual_check(ManualCheck::Fallback)
    }

    /// Never extract manually
    #[must_use]
    pub fn with_manual_check_never(self) -> Self {
        self.with_manual_check(ManualCheck::Never)
    }

    /// Sets the manual check mode
    #[must_use]
    pub fn with_manual_check(mut self, manual_check: ManualCheck) -> Self {
        self.manual_check = Some(manual_check);
        self
    }

    /// Request that chip data is read (`DESIRED`) or ignored (`IGNORE`)
    #[must_use]
    pub fn with_chip_data(mut self, chip_data: impl Into<String>) -> Self {
        self.chip_data = Some(chip_data.into());
        self
    }

    /// Builds the task
    ///
    /// # Errors
    /// Returns `SdkError::MissingField` if no manual check mode was chosen
    pub fn build(self) -> SdkResult<RequestedTask> {
        let manual_check = self
            .manual_check
            .ok_or(SdkError::MissingField("manual_check"))?;

        Ok(RequestedTask::TextExtraction(TextExtractionConfig {
            manual_check,
            chip_data: self.chip_data,
        }))
    }
}
