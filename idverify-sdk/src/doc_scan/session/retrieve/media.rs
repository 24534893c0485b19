use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::parse::{opt_datetime, opt_str};

/// Reference to a media object stored with the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResponse {
    id: Option<String>,
    media_type: Option<String>,
    created: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
}

impl MediaResponse {
    /// Media id, usable with `DocScanService::get_media_content`
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Media type, e.g. `IMAGE` or `JSON`
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Creation time
    #[must_use]
    pub const fn created(&self) -> Option<&DateTime<Utc>> {
        self.created.as_ref()
    }

    /// Last update time
    #[must_use]
    pub const fn last_updated(&self) -> Option<&DateTime<Utc>> {
        self.last_updated.as_ref()
    }
}

impl From<&Value> for MediaResponse {
    fn from(value: &Value) -> Self {
        Self {
            id: opt_str(value, "id"),
            media_type: opt_str(value, "type"),
            created: opt_datetime(value, "created"),
            last_updated: opt_datetime(value, "last_updated"),
        }
    }
}

/// Media produced by a check or task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMedia {
    id: Option<String>,
    media_type: Option<String>,
}

impl GeneratedMedia {
    /// Media id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Media type
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

impl From<&Value> for GeneratedMedia {
    fn from(value: &Value) -> Self {
        Self {
            id: opt_str(value, "id"),
            media_type: opt_str(value, "type"),
        }
    }
}
