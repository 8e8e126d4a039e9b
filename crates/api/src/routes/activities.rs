//! Activity listing and sign-up handlers

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use mergington_domain::constants::EMAIL_FIELD;
use mergington_domain::{ActivityDetails, Result, SignupConfirmation};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::errors::ApiError;
use crate::utils::logging::log_request_outcome;

/// `?email=` query string shared by signup and unregister
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// Unwrap the extractor result into the email, rejecting malformed or
    /// missing query strings with a JSON error body.
    fn require(
        query: std::result::Result<Query<Self>, QueryRejection>,
    ) -> std::result::Result<String, ApiError> {
        let Query(query) = query?;
        query.email.ok_or(ApiError::MissingParameter(EMAIL_FIELD))
    }
}

/// `{"message": "..."}` confirmation body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<SignupConfirmation> for MessageResponse {
    fn from(confirmation: SignupConfirmation) -> Self {
        Self { message: confirmation.message() }
    }
}

/// GET /activities
pub async fn list_activities(
    State(ctx): State<Arc<AppContext>>,
) -> Json<BTreeMap<String, ActivityDetails>> {
    let start = Instant::now();
    let activities = ctx.directory.list();
    log_request_outcome("activities::list", start.elapsed(), None);
    Json(activities)
}

/// POST /activities/{activity}/signup?email=...
pub async fn signup(
    State(ctx): State<Arc<AppContext>>,
    Path(activity): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> std::result::Result<Json<MessageResponse>, ApiError> {
    let email = EmailQuery::require(query)?;
    let start = Instant::now();
    let result = ctx.directory.register(&activity, &email);
    respond("activities::signup", start, result)
}

/// DELETE /activities/{activity}/unregister?email=...
pub async fn unregister(
    State(ctx): State<Arc<AppContext>>,
    Path(activity): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> std::result::Result<Json<MessageResponse>, ApiError> {
    let email = EmailQuery::require(query)?;
    let start = Instant::now();
    let result = ctx.directory.unregister(&activity, &email);
    respond("activities::unregister", start, result)
}

fn respond(
    route: &str,
    start: Instant,
    result: Result<SignupConfirmation>,
) -> std::result::Result<Json<MessageResponse>, ApiError> {
    log_request_outcome(route, start.elapsed(), result.as_ref().err());
    Ok(Json(result?.into()))
}
