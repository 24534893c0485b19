use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use idverify_sdk::DocScanService;
use serde::Serialize;
use tracing::instrument;

use crate::{media_storage::MediaStorage, types::AppError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContentResponse {
    mime_type: String,
    /// `data:` URI of the content, usable as an `<img src>`
    data_uri: String,
    /// File name under the static directory, for images only
    stored_as: Option<String>,
}

/// Fetches a media object, keeps a copy of images under the static directory
/// and returns the content as a data URI
///
/// Answers 204 when the API holds no content for the media id.
///
/// # Errors
///
/// Returns an error if the download fails or the image cannot be written
#[instrument(skip(doc_scan, media_storage))]
pub async fn get_media(
    Extension(doc_scan): Extension<Arc<DocScanService>>,
    Extension(media_storage): Extension<Arc<MediaStorage>>,
    Path((session_id, media_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let Some(media) = doc_scan.get_media_content(&session_id, &media_id).await? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let stored_as = if media.is_image() {
        Some(media_storage.save(&media_id, &media).await?)
    } else {
        None
    };

    Ok(Json(MediaContentResponse {
        mime_type: media.mime_type().to_string(),
        data_uri: media.base64_content(),
        stored_as,
    })
    .into_response())
}
