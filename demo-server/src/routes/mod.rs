mod health;
mod index;
mod media;
pub mod profile;
pub mod sessions;
pub mod share;

use axum::{
    routing::{get, post},
    Router,
};

/// Creates the router with all handler routes
pub fn handler() -> Router {
    Router::new()
        .route("/", get(index::handler))
        .route("/health", get(health::handler))
        .route("/dynamic-share", get(share::create_share_url))
        .route("/profile", get(profile::handler))
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/{session_id}",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/sessions/{session_id}/media/{media_id}", get(media::get_media))
}
