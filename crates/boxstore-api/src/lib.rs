//! # boxstore-api — Axum HTTP facade for boxstore
//!
//! Thin translation layer between the web API and the GitHub contents
//! client in `boxstore-github`. No database, no cache, no background work:
//! every request goes straight through to GitHub and back.
//!
//! ## API Surface
//!
//! | Route               | Module            | Behavior                       |
//! |---------------------|-------------------|--------------------------------|
//! | `GET /`             | [`routes::pages`] | Static landing page            |
//! | `GET /api/boxes`    | [`routes::boxes`] | Fetch the current box document |
//! | `POST /api/boxes`   | [`routes::boxes`] | Overwrite the box document     |
//! | `GET /health/*`     | (here)            | Liveness/readiness probes      |

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::pages::router())
        .merge(routes::boxes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
