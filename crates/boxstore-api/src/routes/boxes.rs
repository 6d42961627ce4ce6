//! Box document endpoints.
//!
//! Stateless passthrough to the GitHub contents client: no validation, no
//! caching, no retry. `POST` performs the classic fetch-then-write pair —
//! the current SHA is read immediately before the write, and the window
//! between the two calls is deliberately unguarded (GitHub's own SHA check
//! is the only conflict detection in the system).

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the box document router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/boxes", get(get_boxes).post(save_boxes))
}

/// GET /api/boxes — return the current box document.
async fn get_boxes(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let (document, _sha) = state.store.fetch().await?;
    Ok(Json(document))
}

/// POST /api/boxes — overwrite the box document with the request body.
///
/// The body is accepted verbatim: any JSON value, array or not, becomes the
/// new document. The current SHA is fetched first so GitHub can reject a
/// write that races a concurrent change.
async fn save_boxes(
    State(state): State<AppState>,
    Json(new_boxes): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let (_current, sha) = state.store.fetch().await?;
    state.store.store(&new_boxes, sha.as_deref()).await?;
    Ok(Json(serde_json::json!({"success": true})))
}
