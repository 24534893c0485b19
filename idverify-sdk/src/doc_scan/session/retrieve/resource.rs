use chrono::{DateTime, Utc};
use serde_json::Value;

use super::media::{GeneratedMedia, MediaResponse};
use crate::parse::{array, object, opt_datetime, opt_str};

fn media_of(value: &Value) -> Option<MediaResponse> {
    object(value, "media").map(MediaResponse::from)
}

/// One captured page of an identity document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    capture_method: Option<String>,
    media: Option<MediaResponse>,
}

impl PageResponse {
    /// How the page was captured, e.g. `CAMERA`
    #[must_use]
    pub fn capture_method(&self) -> Option<&str> {
        self.capture_method.as_deref()
    }

    /// Image of the page
    #[must_use]
    pub const fn media(&self) -> Option<&MediaResponse> {
        self.media.as_ref()
    }
}

impl From<&Value> for PageResponse {
    fn from(value: &Value) -> Self {
        Self {
            capture_method: opt_str(value, "capture_method"),
            media: media_of(value),
        }
    }
}

/// A check generated by a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCheck {
    id: Option<String>,
    check_type: Option<String>,
}

impl GeneratedCheck {
    /// Check id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Check type
    #[must_use]
    pub fn check_type(&self) -> Option<&str> {
        self.check_type.as_deref()
    }
}

impl From<&Value> for GeneratedCheck {
    fn from(value: &Value) -> Self {
        Self {
            id: opt_str(value, "id"),
            check_type: opt_str(value, "type"),
        }
    }
}

/// A task run against a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResponse {
    id: Option<String>,
    task_type: Option<String>,
    state: Option<String>,
    created: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
    generated_checks: Vec<GeneratedCheck>,
    generated_media: Vec<GeneratedMedia>,
}

impl TaskResponse {
    /// Task id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Task type, e.g. `ID_DOCUMENT_TEXT_DATA_EXTRACTION`
    #[must_use]
    pub fn task_type(&self) -> Option<&str> {
        self.task_type.as_deref()
    }

    /// Task state
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
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

    /// Checks spawned by this task
    #[must_use]
    pub fn generated_checks(&self) -> &[GeneratedCheck] {
        &self.generated_checks
    }

    /// Media produced by this task
    #[must_use]
    pub fn generated_media(&self) -> &[GeneratedMedia] {
        &self.generated_media
    }
}

impl From<&Value> for TaskResponse {
    fn from(value: &Value) -> Self {
        Self {
            id: opt_str(value, "id"),
            task_type: opt_str(value, "type"),
            state: opt_str(value, "state"),
            created: opt_datetime(value, "created"),
            last_updated: opt_datetime(value, "last_updated"),
            generated_checks: array(value, "generated_checks")
                .iter()
                .map(GeneratedCheck::from)
                .collect(),
            generated_media: array(value, "generated_media")
                .iter()
                .map(GeneratedMedia::from)
                .collect(),
        }
    }
}

/// An identity document submitted by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdDocumentResourceResponse {
    id: Option<String>,
    document_type: Option<String>,
    issuing_country: Option<String>,
    pages: Vec<PageResponse>,
    document_fields: Option<MediaResponse>,
    tasks: Vec<TaskResponse>,
}

impl IdDocumentResourceResponse {
    /// Resource id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Document type, e.g. `PASSPORT`
    #[must_use]
    pub fn document_type(&self) -> Option<&str> {
        self.document_type.as_deref()
    }

    /// ISO 3166-1 alpha-3 issuing country
    #[must_use]
    pub fn issuing_country(&self) -> Option<&str> {
        self.issuing_country.as_deref()
    }

    /// Captured pages
    #[must_use]
    pub fn pages(&self) -> &[PageResponse] {
        &self.pages
    }

    /// Media holding the extracted document fields
    #[must_use]
    pub const fn document_fields(&self) -> Option<&MediaResponse> {
        self.document_fields.as_ref()
    }

    /// Tasks run on the document
    #[must_use]
    pub fn tasks(&self) -> &[TaskResponse] {
        &self.tasks
    }
}

impl From<&Value> for IdDocumentResourceResponse {
    fn from(value: &Value) -> Self {
        Self {
            id: opt_str(value, "id"),
            document_type: opt_str(value, "document_type"),
            issuing_country: opt_str(value, "issuing_country"),
            pages: array(value, "pages").iter().map(PageResponse::from).collect(),
            document_fields: object(value, "document_fields").and_then(media_of),
            tasks: array(value, "tasks").iter().map(TaskResponse::from).collect(),
        }
    }
}

/// A liveness capture submitted by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivenessResourceResponse {
    id: Option<String>,
    liveness_type: Option<String>,
    frames: Vec<MediaResponse>,
    facemap: Option<MediaResponse>,
    tasks: Vec<TaskResponse>,
}

impl LivenessResourceResponse {
    /// Resource id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Liveness type, e.g. `ZOOM`
    #[must_use]
    pub fn liveness_type(&self) -> Option<&str> {
        self.liveness_type.as_deref()
    }

    /// Captured frames
    #[must_use]
    pub fn frames(&self) -> &[MediaResponse] {
        &self.frames
    }

    /// 3D face map
    #[must_use]
    pub const fn facemap(&self) -> Option<&MediaResponse> {
        self.facemap.as_ref()
    }

    /// Tasks run on the capture
    #[must_use]
    pub fn tasks(&self) -> &[TaskResponse] {
        &self.tasks
    }
}

impl From<&Value> for LivenessResourceResponse {
    fn from(value: &Value) -> Self {
        Self {
            id: opt_str(value, "id"),
            liveness_type: opt_str(value, "liveness_type"),
            frames: array(value, "frames").iter().filter_map(media_of).collect(),
            facemap: object(value, "facemap").and_then(media_of),
            tasks: array(value, "tasks").iter().map(TaskResponse::from).collect(),
        }
    }
}

/// Everything the user submitted during the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceContainer {
    id_documents: Vec<IdDocumentResourceResponse>,
    liveness_capture: Vec<LivenessResourceResponse>,
}

impl ResourceContainer {
    /// Submitted identity documents
    #[must_use]
    pub fn id_documents(&self) -> &[IdDocumentResourceResponse] {
        &self.id_documents
    }

    /// Submitted liveness captures
    #[must_use]
    pub fn liveness_capture(&self) -> &[LivenessResourceResponse] {
        &self.liveness_capture
    }

    /// Liveness captures of the given type
    pub fn liveness_of_type<'a>(
        &'a self,
        liveness_type: &'a str,
    ) -> impl Iterator<Item = &'a LivenessResourceResponse> + 'a {
        self.liveness_capture
            .iter()
            .filter(move |capture| capture.liveness_type() == Some(liveness_type))
    }
}

impl From<&Value> for ResourceContainer {
    fn from(value: &Value) -> Self {
        Self {
            id_documents: array(value, "id_documents")
                .iter()
                .map(IdDocumentResourceResponse::from)
                .collect(),
            liveness_capture: array(value, "liveness_capture")
                .iter()
                .map(LivenessResourceResponse::from)
                .collect(),
        }
    }
}
