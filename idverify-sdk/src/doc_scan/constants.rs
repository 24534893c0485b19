//! Wire constants of the document scan API

pub const ID_DOCUMENT_AUTHENTICITY: &str = "ID_DOCUMENT_AUTHENTICITY";
pub const ID_DOCUMENT_FACE_MATCH: &str = "ID_DOCUMENT_FACE_MATCH";
pub const ID_DOCUMENT_TEXT_DATA_CHECK: &str = "ID_DOCUMENT_TEXT_DATA_CHECK";
pub const ID_DOCUMENT_TEXT_DATA_EXTRACTION: &str = "ID_DOCUMENT_TEXT_DATA_EXTRACTION";
pub const LIVENESS: &str = "LIVENESS";

pub const RESOURCE_UPDATE: &str = "RESOURCE_UPDATE";
pub const TASK_COMPLETION: &str = "TASK_COMPLETION";
pub const CHECK_COMPLETION: &str = "CHECK_COMPLETION";
pub const SESSION_COMPLETION: &str = "SESSION_COMPLETION";
