use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{media::GeneratedMedia, report::ReportResponse};
use crate::doc_scan::constants::{
    ID_DOCUMENT_AUTHENTICITY, ID_DOCUMENT_FACE_MATCH, ID_DOCUMENT_TEXT_DATA_CHECK, LIVENESS,
};
use crate::parse::{array, object, opt_datetime, opt_str};

/// Kind of check, keyed on the check's `type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    /// `ID_DOCUMENT_AUTHENTICITY`
    DocumentAuthenticity,
    /// `ID_DOCUMENT_FACE_MATCH`
    FaceMatch,
    /// `ID_DOCUMENT_TEXT_DATA_CHECK`
    TextData,
    /// `LIVENESS`
    Liveness,
    /// Any type this SDK does not know about
    Other(String),
}

impl From<&str> for CheckKind {
    fn from(check_type: &str) -> Self {
        match check_type {
            ID_DOCUMENT_AUTHENTICITY => Self::DocumentAuthenticity,
            ID_DOCUMENT_FACE_MATCH => Self::FaceMatch,
            ID_DOCUMENT_TEXT_DATA_CHECK => Self::TextData,
            LIVENESS => Self::Liveness,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A check run against the session's resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResponse {
    kind: CheckKind,
    id: Option<String>,
    state: Option<String>,
    report: Option<ReportResponse>,
    resources_used: Vec<String>,
    generated_media: Vec<GeneratedMedia>,
    created: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
}

impl CheckResponse {
    /// Kind of check
    #[must_use]
    pub const fn kind(&self) -> &CheckKind {
        &self.kind
    }

    /// Check id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Check state, e.g. `CREATED` or `DONE`
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Report, once the check has finished
    #[must_use]
    pub const fn report(&self) -> Option<&ReportResponse> {
        self.report.as_ref()
    }

    /// Ids of the resources the check looked at
    #[must_use]
    pub fn resources_used(&self) -> &[String] {
        &self.resources_used
    }

    /// Media produced by the check
    #[must_use]
    pub fn generated_media(&self) -> &[GeneratedMedia] {
        &self.generated_media
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

impl From<&Value> for CheckResponse {
    fn from(value: &Value) -> Self {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map_or_else(|| CheckKind::Other(String::new()), CheckKind::from);

        Self {
            kind,
            id: opt_str(value, "id"),
            state: opt_str(value, "state"),
            report: object(value, "report").map(ReportResponse::from),
            resources_used: array(value, "resources_used")
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect(),
            generated_media: array(value, "generated_media")
                .iter()
                .map(GeneratedMedia::from)
                .collect(),
            created: opt_datetime(value, "created"),
            last_updated: opt_datetime(value, "last_updated"),
        }
    }
}
