use serde::Serialize;

const CAMERA: &str = "CAMERA";
const CAMERA_AND_UPLOAD: &str = "CAMERA_AND_UPLOAD";

/// Look and behaviour of the hosted capture UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SdkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_capture_methods: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    font_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset_issuing_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_url: Option<String>,
}

/// Builds an [`SdkConfig`]; every field is optional
#[derive(Debug, Clone, Default)]
pub struct SdkConfigBuilder {
    config: SdkConfig,
}

impl SdkConfigBuilder {
    /// Creates the builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents may only be captured with the camera
    #[must_use]
    pub fn with_allows_camera(self) -> Self {
        self.with_allowed_capture_methods(CAMERA)
    }

    /// Documents may be captured with the camera or uploaded
    #[must_use]
    pub fn with_allows_camera_and_upload(self) -> Self {
        self.with_allowed_capture_methods(CAMERA_AND_UPLOAD)
    }

    /// Allowed capture methods
    #[must_use]
    pub fn with_allowed_capture_methods(mut self, methods: impl Into<String>) -> Self {
        self.config.allowed_capture_methods = Some(methods.into());
        self
    }

    /// Primary colour, e.g. `#2d9fff`
    #[must_use]
    pub fn with_primary_colour(mut self, colour: impl Into<String>) -> Self {
        self.config.primary_colour = Some(colour.into());
        self
    }

    /// Secondary colour
    #[must_use]
    pub fn with_secondary_colour(mut self, colour: impl Into<String>) -> Self {
        self.config.secondary_colour = Some(colour.into());
        self
    }

    /// Font colour
    #[must_use]
    pub fn with_font_colour(mut self, colour: impl Into<String>) -> Self {
        self.config.font_colour = Some(colour.into());
        self
    }

    /// UI locale, e.g. `en-GB`
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = Some(locale.into());
        self
    }

    /// Country preselected in the document picker
    #[must_use]
    pub fn with_preset_issuing_country(mut self, country: impl Into<String>) -> Self {
        self.config.preset_issuing_country = Some(country.into());
        self
    }

    /// Redirect target after a successful capture
    #[must_use]
    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.config.success_url = Some(url.into());
        self
    }

    /// Redirect target after a failed capture
    #[must_use]
    pub fn with_error_url(mut self, url: impl Into<String>) -> Self {
        self.config.error_url = Some(url.into());
        self
    }

    /// Builds the configuration
    #[must_use]
    pub fn build(self) -> SdkConfig {
        self.config
    }
}
