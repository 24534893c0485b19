use serde_json::Value;

use crate::error::{SdkError, SdkResult};
use crate::parse::require_str;

/// URL the user opens to start a share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareUrlResult {
    share_url: String,
    ref_id: String,
}

impl ShareUrlResult {
    #[must_use]
    pub fn share_url(&self) -> &str {
        &self.share_url
    }

    /// Reference of the share on the API side
    #[must_use]
    pub fn ref_id(&self) -> &str {
        &self.ref_id
    }
}

impl TryFrom<&Value> for ShareUrlResult {
    type Error = SdkError;

    fn try_from(value: &Value) -> SdkResult<Self> {
        Ok(Self {
            share_url: require_str(value, "qrcode")?,
            ref_id: require_str(value, "ref_id")?,
        })
    }
}
