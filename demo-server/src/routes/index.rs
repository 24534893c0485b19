use std::sync::Arc;

use axum::{Extension, Json};
use serde::Serialize;

use crate::types::DemoConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponse {
    client_sdk_id: String,
    scenario_id: String,
}

/// Identifiers the front page needs to render the share button
pub async fn handler(Extension(config): Extension<Arc<DemoConfig>>) -> Json<IndexResponse> {
    Json(IndexResponse {
        client_sdk_id: config.client_sdk_id().to_string(),
        scenario_id: config.scenario_id().to_string(),
    })
}
