//! Read-side models for `GET /sessions/{id}`.
//!
//! Only `session_id` is validated. Everything else is passed through as the
//! API sent it so new states and result strings do not break callers.

mod check;
mod media;
mod report;
mod resource;
mod session;

pub use check::{CheckKind, CheckResponse};
pub use media::{GeneratedMedia, MediaResponse};
pub use report::{BreakdownResponse, DetailsResponse, RecommendationResponse, ReportResponse};
pub use resource::{
    GeneratedCheck, IdDocumentResourceResponse, LivenessResourceResponse, PageResponse,
    ResourceContainer, TaskResponse,
};
pub use session::GetSessionResult;
