use std::sync::Arc;

use axum::{Extension, Json};
use idverify_sdk::share::{
    attribute::WantedAttributeBuilder,
    extension::LocationConstraintExtensionBuilder,
    policy::DynamicPolicyBuilder,
    scenario::{DynamicScenario, DynamicScenarioBuilder},
};
use idverify_sdk::{SdkResult, ShareClient};
use serde::Serialize;
use tracing::instrument;

use crate::types::{AppError, DemoConfig};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    /// URL the user opens to share their attributes
    share_url: String,
    ref_id: String,
}

/// Scenario used by the demo: a location check around central London plus a
/// handful of profile attributes
///
/// # Errors
///
/// Returns an error if one of the builders is missing a required field
pub fn demo_scenario(callback_endpoint: &str) -> SdkResult<DynamicScenario> {
    let location = LocationConstraintExtensionBuilder::new()
        .with_latitude(51.5074)
        .with_longitude(-0.1278)
        .with_radius(6000.0)
        .build()?;

    let email = WantedAttributeBuilder::new().with_name("email_address").build()?;

    let policy = DynamicPolicyBuilder::new()
        .with_wanted_attribute(email)
        .with_full_name()
        .with_selfie()
        .with_phone_number()
        .with_age_over(18)
        .build();

    DynamicScenarioBuilder::new()
        .with_callback_endpoint(callback_endpoint)
        .with_policy(policy)
        .with_extension(location)
        .build()
}

/// Builds the demo scenario and exchanges it for a share URL
///
/// # Errors
///
/// Returns an error if the sharing API rejects the scenario or cannot be reached
#[instrument(skip_all)]
pub async fn create_share_url(
    Extension(config): Extension<Arc<DemoConfig>>,
    Extension(share_client): Extension<Arc<ShareClient>>,
) -> Result<Json<ShareResponse>, AppError> {
    let scenario = demo_scenario(&format!("{}/profile", config.base_url()))?;
    let result = share_client.create_share_url(&scenario).await?;

    tracing::info!("Created share URL with ref id {}", result.ref_id());

    Ok(Json(ShareResponse {
        share_url: result.share_url().to_string(),
        ref_id: result.ref_id().to_string(),
    }))
}
