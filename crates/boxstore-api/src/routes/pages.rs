//! Static landing page.
//!
//! The page is compiled into the binary — there is no template engine and
//! nothing dynamic server-side; the page talks to `/api/boxes` from the
//! browser.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the landing page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / — serve the embedded landing page.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
