use std::sync::Arc;

use axum::{extract::Query, http::StatusCode, Extension, Json};
use idverify_sdk::profile::{AgeVerification, Attribute};
use idverify_sdk::share::constants::{
    ATTR_DATE_OF_BIRTH, ATTR_DOCUMENT_DETAILS, ATTR_DOCUMENT_IMAGES, ATTR_EMAIL_ADDRESS,
    ATTR_FAMILY_NAME, ATTR_FULL_NAME, ATTR_GENDER, ATTR_GIVEN_NAMES, ATTR_NATIONALITY,
    ATTR_PHONE_NUMBER, ATTR_POSTAL_ADDRESS, ATTR_SELFIE, ATTR_STRUCTURED_POSTAL_ADDRESS,
};
use idverify_sdk::{Profile, ShareClient};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::{media_storage::MediaStorage, types::AppError};

/// File name (without extension) the latest selfie is stored under
pub const SELFIE_FILE_NAME: &str = "YotiSelfie";

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeVerificationItem {
    check: String,
    age: u32,
    passed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeItem {
    name: String,
    label: String,
    value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    age_verification: Option<AgeVerificationItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    receipt_id: String,
    remember_me_id: Option<String>,
    parent_remember_me_id: Option<String>,
    full_name: Option<Value>,
    /// `data:` URI of the selfie
    selfie_uri: Option<String>,
    /// File name of the selfie under the static directory
    selfie_stored_as: Option<String>,
    attributes: Vec<AttributeItem>,
}

fn label(name: &str) -> String {
    let label = match name {
        ATTR_FAMILY_NAME => "Family names",
        ATTR_GIVEN_NAMES => "Given names",
        ATTR_DATE_OF_BIRTH => "Date of birth",
        ATTR_GENDER => "Gender",
        ATTR_NATIONALITY => "Nationality",
        ATTR_PHONE_NUMBER => "Mobile number",
        ATTR_EMAIL_ADDRESS => "Email address",
        ATTR_POSTAL_ADDRESS => "Address",
        ATTR_DOCUMENT_DETAILS => "Document Details",
        ATTR_STRUCTURED_POSTAL_ADDRESS => "Structured Address",
        ATTR_DOCUMENT_IMAGES => "Document Images",
        other => return other.replacen('_', " ", 1),
    };
    label.to_string()
}

fn attribute_item(attribute: &Attribute) -> AttributeItem {
    AttributeItem {
        name: attribute.name().to_string(),
        label: label(attribute.name()),
        value: attribute.value().to_json(),
        age_verification: None,
    }
}

fn age_verification_item(verification: &AgeVerification) -> AttributeItem {
    AttributeItem {
        name: verification.attribute().name().to_string(),
        label: "Age Verification".to_string(),
        value: verification.attribute().value().to_json(),
        age_verification: Some(AgeVerificationItem {
            check: verification.check().to_string(),
            age: verification.age(),
            passed: verification.passed(),
        }),
    }
}

/// Display items: plain attributes first, then age verifications. Derived
/// attributes, the selfie and the full name are left out.
#[must_use]
pub fn build_attribute_items(profile: &Profile) -> Vec<AttributeItem> {
    let plain = profile
        .attributes()
        .iter()
        .filter(|attribute| {
            !attribute.is_derived()
                && attribute.name() != ATTR_SELFIE
                && attribute.name() != ATTR_FULL_NAME
        })
        .map(attribute_item);

    let age_verifications = profile.age_verifications();

    plain
        .chain(age_verifications.iter().map(age_verification_item))
        .collect()
}

/// Callback for a completed share: exchanges the token for the user's
/// profile and keeps a copy of the selfie under the static directory
///
/// # Errors
///
/// Returns an error if no token was given, the token cannot be decrypted,
/// the profile call fails or the selfie cannot be written
#[instrument(skip_all)]
pub async fn handler(
    Extension(share_client): Extension<Arc<ShareClient>>,
    Extension(media_storage): Extension<Arc<MediaStorage>>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let Some(token) = query.token.filter(|token| !token.is_empty()) else {
        return Err(AppError::new(
            StatusCode::BAD_REQUEST,
            "missing_token",
            "No token has been provided.",
            false,
        ));
    };

    let details = share_client.get_activity_details(&token).await?;
    let profile = details.profile();

    let selfie_stored_as = match profile.selfie().and_then(|selfie| selfie.value().as_image()) {
        Some(selfie) => Some(media_storage.save(SELFIE_FILE_NAME, selfie).await?),
        None => None,
    };

    Ok(Json(ProfileResponse {
        receipt_id: details.receipt_id().to_string(),
        remember_me_id: details.remember_me_id().map(ToString::to_string),
        parent_remember_me_id: details.parent_remember_me_id().map(ToString::to_string),
        full_name: profile.full_name().map(|name| name.value().to_json()),
        selfie_uri: details.base64_selfie_uri(),
        selfie_stored_as,
        attributes: build_attribute_items(profile),
    }))
}
