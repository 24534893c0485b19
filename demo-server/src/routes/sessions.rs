use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, Extension, Json};
use idverify_sdk::doc_scan::session::create::{
    RequestedDocumentAuthenticityCheckBuilder, RequestedFaceMatchCheckBuilder,
    RequestedLivenessCheckBuilder, RequestedTextExtractionTaskBuilder, SdkConfigBuilder,
    SessionSpecification, SessionSpecificationBuilder,
};
use idverify_sdk::doc_scan::session::retrieve::{
    CheckKind, CheckResponse, GetSessionResult, IdDocumentResourceResponse,
    LivenessResourceResponse, MediaResponse, RecommendationResponse, ReportResponse,
};
use idverify_sdk::{DocScanService, SdkResult};
use serde::Serialize;
use tracing::instrument;

use crate::types::{AppError, DemoConfig};

const CLIENT_SESSION_TOKEN_TTL: u32 = 600;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    session_id: String,
    client_session_token: String,
    client_session_token_ttl: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    #[serde(rename = "type")]
    check_type: String,
    state: Option<String>,
    recommendation: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    session_id: String,
    state: Option<String>,
    user_tracking_id: Option<String>,
    checks: Vec<CheckSummary>,
    id_documents: usize,
    /// Media ids of every captured document page and liveness frame
    media_ids: Vec<String>,
}

/// Specification used for every demo session: document authenticity, face
/// match with manual fallback, zoom liveness and text extraction
///
/// # Errors
///
/// Returns an error if one of the check builders rejects its configuration
pub fn demo_specification(base_url: &str) -> SdkResult<SessionSpecification> {
    let sdk_config = SdkConfigBuilder::new()
        .with_allows_camera_and_upload()
        .with_primary_colour("#2d9fff")
        .with_secondary_colour("#FFFFFF")
        .with_font_colour("#FFFFFF")
        .with_locale("en-GB")
        .with_preset_issuing_country("GBR")
        .with_success_url(format!("{base_url}/success"))
        .with_error_url(format!("{base_url}/error"))
        .build();

    Ok(SessionSpecificationBuilder::new()
        .with_client_session_token_ttl(CLIENT_SESSION_TOKEN_TTL)
        .with_resources_ttl(CLIENT_SESSION_TOKEN_TTL * 2)
        .with_user_tracking_id("demo-user")
        .with_requested_check(RequestedDocumentAuthenticityCheckBuilder::new().build())
        .with_requested_check(
            RequestedFaceMatchCheckBuilder::new()
                .with_manual_check_fallback()
                .build()?,
        )
        .with_requested_check(
            RequestedLivenessCheckBuilder::new()
                .for_zoom_liveness()
                .with_max_retries(1)
                .build()?,
        )
        .with_requested_task(
            RequestedTextExtractionTaskBuilder::new()
                .with_manual_check_fallback()
                .build()?,
        )
        .with_sdk_config(sdk_config)
        .build())
}

/// Creates a doc-scan session for the iframe flow
///
/// # Errors
///
/// Returns an error if the doc-scan API rejects the session or answers with an
/// invalid body
#[instrument(skip_all)]
pub async fn create_session(
    Extension(config): Extension<Arc<DemoConfig>>,
    Extension(doc_scan): Extension<Arc<DocScanService>>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let specification = demo_specification(&config.base_url())?;
    let session = doc_scan.create_session(&specification).await?;

    tracing::info!("Created session {}", session.session_id());

    Ok(Json(CreateSessionResponse {
        session_id: session.session_id().to_string(),
        client_session_token: session.client_session_token().to_string(),
        client_session_token_ttl: session.client_session_token_ttl(),
    }))
}

/// Summarises a session's checks and captured resources
///
/// # Errors
///
/// Returns `NOT_FOUND` for unknown sessions and a gateway error otherwise
#[instrument(skip(doc_scan))]
pub async fn get_session(
    Extension(doc_scan): Extension<Arc<DocScanService>>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionSummary>, AppError> {
    let session = doc_scan.get_session(&session_id).await?;
    Ok(Json(summarise(&session)))
}

/// Deletes a session
///
/// # Errors
///
/// Returns an error if the doc-scan API refuses the deletion
#[instrument(skip(doc_scan))]
pub async fn delete_session(
    Extension(doc_scan): Extension<Arc<DocScanService>>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    doc_scan.delete_session(&session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn summarise(session: &GetSessionResult) -> SessionSummary {
    let resources = session.resources();

    let page_media = resources
        .id_documents()
        .iter()
        .flat_map(IdDocumentResourceResponse::pages)
        .filter_map(|page| page.media().and_then(MediaResponse::id));
    let frame_media = resources
        .liveness_capture()
        .iter()
        .flat_map(LivenessResourceResponse::frames)
        .filter_map(MediaResponse::id);

    SessionSummary {
        session_id: session.session_id().to_string(),
        state: session.state().map(ToString::to_string),
        user_tracking_id: session.user_tracking_id().map(ToString::to_string),
        checks: session.checks().iter().map(summarise_check).collect(),
        id_documents: resources.id_documents().len(),
        media_ids: page_media.chain(frame_media).map(ToString::to_string).collect(),
    }
}

fn summarise_check(check: &CheckResponse) -> CheckSummary {
    let check_type = match check.kind() {
        CheckKind::DocumentAuthenticity => "ID_DOCUMENT_AUTHENTICITY",
        CheckKind::FaceMatch => "ID_DOCUMENT_FACE_MATCH",
        CheckKind::TextData => "ID_DOCUMENT_TEXT_DATA_CHECK",
        CheckKind::Liveness => "LIVENESS",
        CheckKind::Other(other) => other.as_str(),
    };

    CheckSummary {
        check_type: check_type.to_string(),
        state: check.state().map(ToString::to_string),
        recommendation: check
            .report()
            .and_then(ReportResponse::recommendation)
            .and_then(RecommendationResponse::value)
            .map(ToString::to_string),
    }
}
