//! HTTP routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/activities` | [`activities::list_activities`] |
//! | POST | `/activities/{activity}/signup` | [`activities::signup`] |
//! | DELETE | `/activities/{activity}/unregister` | [`activities::unregister`] |
//! | GET | `/health` | [`health::health`] |
//! | GET | `/` | redirect to the front-end |
//! | GET | `/static/*` | files under `server.static_dir` |

use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

pub mod activities;
pub mod health;

/// Landing page served from the static directory
pub const INDEX_PATH: &str = "/static/index.html";

/// Build the application router around a shared context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    let static_dir = ServeDir::new(&ctx.config.server.static_dir);

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity}/signup", post(activities::signup))
        .route("/activities/{activity}/unregister", delete(activities::unregister))
        .route("/health", get(health::health))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
