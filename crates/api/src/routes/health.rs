use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::context::AppContext;
use crate::utils::health::{check, HealthStatus};

/// GET /health
///
/// Always 200; degradation is reported in the body.
pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<HealthStatus> {
    Json(check(&ctx))
}
