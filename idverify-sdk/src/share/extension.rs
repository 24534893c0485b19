use serde::Serialize;
use serde_json::{json, Value};

use super::constants::{LOCATION_CONSTRAINT, TRANSACTIONAL_FLOW};
use crate::error::{SdkError, SdkResult};

const DEFAULT_RADIUS: f64 = 150.0;
const DEFAULT_MAX_UNCERTAINTY_RADIUS: f64 = 150.0;

/// Extra behaviour attached to a share scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extension {
    #[serde(rename = "type")]
    extension_type: String,
    content: Value,
}

impl Extension {
    #[must_use]
    pub fn new(extension_type: impl Into<String>, content: Value) -> Self {
        Self {
            extension_type: extension_type.into(),
            content,
        }
    }

    #[must_use]
    pub fn extension_type(&self) -> &str {
        &self.extension_type
    }

    #[must_use]
    pub const fn content(&self) -> &Value {
        &self.content
    }
}

/// Builds a geo-fence extension: the share only succeeds when the user's
/// device is within `radius` metres of the given point
#[derive(Debug, Clone)]
pub struct LocationConstraintExtensionBuilder {
    latitude: Option<f64>,
    longitude: Option<f64>,
    radius: f64,
    max_uncertainty_radius: f64,
}

impl Default for LocationConstraintExtensionBuilder {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            radius: DEFAULT_RADIUS,
            max_uncertainty_radius: DEFAULT_MAX_UNCERTAINTY_RADIUS,
        }
    }
}

impl LocationConstraintExtensionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    #[must_use]
    pub const fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    /// Allowed distance from the point, in metres
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Largest accepted device location uncertainty, in metres
    #[must_use]
    pub const fn with_max_uncertainty(mut self, max_uncertainty_radius: f64) -> Self {
        self.max_uncertainty_radius = max_uncertainty_radius;
        self
    }

    /// # Errors
    /// - `SdkError::MissingField` if latitude or longitude is unset
    /// - `SdkError::InvalidValue` if any coordinate or radius is NaN or infinite
    pub fn build(self) -> SdkResult<Extension> {
        let latitude = self.latitude.ok_or(SdkError::MissingField("latitude"))?;
        let longitude = self.longitude.ok_or(SdkError::MissingField("longitude"))?;

        let latitude = finite("latitude", latitude)?;
        let longitude = finite("longitude", longitude)?;
        let radius = finite("radius", self.radius)?;
        let max_uncertainty_radius = finite("max_uncertainty_radius", self.max_uncertainty_radius)?;

        Ok(Extension::new(
            LOCATION_CONSTRAINT,
            json!({
                "expected_device_location": {
                    "latitude": latitude,
                    "longitude": longitude,
                    "radius": radius,
                    "max_uncertainty_radius": max_uncertainty_radius,
                }
            }),
        ))
    }
}

/// JSON has no NaN or infinity; `json!` would silently turn them into `null`
fn finite(field: &str, value: f64) -> SdkResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SdkError::InvalidValue(format!("{field} must be a finite number")))
    }
}

/// Builds an extension carrying caller-defined transaction data
#[derive(Debug, Clone, Default)]
pub struct TransactionalFlowExtensionBuilder {
    content: Option<Value>,
}

impl TransactionalFlowExtensionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_content(mut self, content: Value) -> Self {
        self.content = Some(content);
        self
    }

    /// # Errors
    /// Returns `SdkError::MissingField` if no content was set
    pub fn build(self) -> SdkResult<Extension> {
        let content = self.content.ok_or(SdkError::MissingField("content"))?;
        Ok(Extension::new(TRANSACTIONAL_FLOW, content))
    }
}
