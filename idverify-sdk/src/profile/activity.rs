use chrono::{DateTime, Utc};
use prost::Message as ProstMessage;
use serde_json::Value;
use tracing::warn;

use super::attribute::Attribute;
use super::crypto;
use super::proto::AttributeList;
use super::Profile;
use crate::error::{SdkError, SdkResult};
use crate::parse::{opt_datetime, opt_str, require_str};
use crate::request::signer::RequestSigner;

const SHARING_SUCCESS: &str = "SUCCESS";

/// Result of a completed share: who shared, when, and what
#[derive(Debug, Clone)]
pub struct ActivityDetails {
    receipt_id: String,
    remember_me_id: Option<String>,
    parent_remember_me_id: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    profile: Profile,
}

impl ActivityDetails {
    /// Decrypts the profile carried by `receipt`.
    ///
    /// Attributes that fail to decode are logged and skipped.
    ///
    /// # Errors
    /// - `SdkError::ShareFailed` if the sharing outcome is not `SUCCESS`
    /// - `SdkError::Schema` if `receipt_id` or `wrapped_receipt_key` is missing
    /// - `SdkError::Decryption` or `SdkError::Protobuf` if the content cannot be unwrapped
    pub fn from_receipt(receipt: &Value, signer: &RequestSigner) -> SdkResult<Self> {
        if let Some(outcome) = opt_str(receipt, "sharing_outcome") {
            if outcome != SHARING_SUCCESS {
                return Err(SdkError::ShareFailed(outcome));
            }
        }

        let receipt_id = require_str(receipt, "receipt_id")?;
        let wrapped_key = require_str(receipt, "wrapped_receipt_key")?;

        let profile = match non_empty(receipt, "other_party_profile_content") {
            Some(content) => {
                let receipt_key = crypto::unwrap_receipt_key(signer, &wrapped_key)?;
                let decrypted = crypto::decrypt_content(&receipt_key, &content)?;
                decode_profile(&decrypted)?
            }
            None => Profile::default(),
        };

        Ok(Self {
            receipt_id,
            remember_me_id: non_empty(receipt, "remember_me_id"),
            parent_remember_me_id: non_empty(receipt, "parent_remember_me_id"),
            timestamp: opt_datetime(receipt, "timestamp"),
            profile,
        })
    }

    #[must_use]
    pub fn receipt_id(&self) -> &str {
        &self.receipt_id
    }

    /// Stable id of the user for this application
    #[must_use]
    pub fn remember_me_id(&self) -> Option<&str> {
        self.remember_me_id.as_deref()
    }

    /// Stable id of the user across the organisation's applications
    #[must_use]
    pub fn parent_remember_me_id(&self) -> Option<&str> {
        self.parent_remember_me_id.as_deref()
    }

    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The selfie as a `data:` URI, if one was shared
    #[must_use]
    pub fn base64_selfie_uri(&self) -> Option<String> {
        self.profile
            .selfie()
            .and_then(|selfie| selfie.value().as_image())
            .map(crate::media::Media::base64_content)
    }
}

fn non_empty(receipt: &Value, field: &str) -> Option<String> {
    opt_str(receipt, field).filter(|value| !value.is_empty())
}

fn decode_profile(bytes: &[u8]) -> SdkResult<Profile> {
    let list = AttributeList::decode(bytes)?;

    let attributes = list
        .attributes
        .into_iter()
        .filter_map(|raw| {
            let name = raw.name.clone();
            match Attribute::try_from(raw) {
                Ok(attribute) => Some(attribute),
                Err(e) => {
                    warn!("Skipping attribute {name}: {e}");
                    None
                }
            }
        })
        .collect();

    Ok(Profile::new(attributes))
}
