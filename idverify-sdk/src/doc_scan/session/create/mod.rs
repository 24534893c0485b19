//! Session creation: the specification builders and the creation result

mod check;
mod document;
mod notification;
mod result;
mod sdk_config;
mod specification;
mod task;

pub use check::{
    DocumentAuthenticityConfig, FaceMatchConfig, LivenessConfig, LivenessType, ManualCheck,
    RequestedCheck, RequestedDocumentAuthenticityCheckBuilder, RequestedFaceMatchCheckBuilder,
    RequestedLivenessCheckBuilder,
};
pub use document::{
    DocumentFilter, DocumentRestriction, DocumentRestrictionsFilterBuilder, Inclusion,
    RequiredDocument, RequiredIdDocumentBuilder,
};
pub use notification::{NotificationConfig, NotificationConfigBuilder};
pub use result::CreateSessionResult;
pub use sdk_config::{SdkConfig, SdkConfigBuilder};
pub use specification::{SessionSpecification, SessionSpecificationBuilder};
pub use task::{RequestedTask, RequestedTextExtractionTaskBuilder, TextExtractionConfig};
