//! Leave Request Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use surrealdb::RecordId;
use validator::Validate;

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{LeaveRequest, LeaveRequestCreate, LeaveStatus};
use crate::db::repository::LeaveRequestRepository;

fn submitter_id(user: &CurrentUser) -> Result<RecordId, AppError> {
    user.id
        .parse()
        .map_err(|_| AppError::invalid_token("Malformed user id in token"))
}

/// Submit a new leave request (always created as Pending)
pub async fn submit(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<LeaveRequestCreate>,
) -> Result<Json<LeaveRequest>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = LeaveRequestRepository::new(state.get_db());
    let created = repo.create(submitter_id(&user)?, payload).await?;

    tracing::info!(
        user_id = %user.id,
        request_id = %created.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        "Leave request submitted"
    );

    Ok(Json(created))
}

/// The authenticated user's own requests
pub async fn mine(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let repo = LeaveRequestRepository::new(state.get_db());
    let requests = repo.find_by_user(submitter_id(&user)?).await?;
    Ok(Json(requests))
}

/// All pending requests, with submitter names, for the approval view
pub async fn list_pending(
    State(state): State<ServerState>,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    let repo = LeaveRequestRepository::new(state.get_db());
    let requests = repo.find_pending().await?;
    Ok(Json(requests))
}

/// Approve a pending request
pub async fn approve(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<LeaveRequest>, AppError> {
    decide(state, user, id, LeaveStatus::Approved).await
}

/// Reject a pending request
pub async fn reject(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<LeaveRequest>, AppError> {
    decide(state, user, id, LeaveStatus::Rejected).await
}

async fn decide(
    state: ServerState,
    user: CurrentUser,
    id: String,
    to: LeaveStatus,
) -> Result<Json<LeaveRequest>, AppError> {
    let repo = LeaveRequestRepository::new(state.get_db());
    let updated = repo.transition(&id, to).await?;

    tracing::info!(
        approver = %user.username,
        request_id = %id,
        decision = to.as_str(),
        "Leave request decided"
    );

    Ok(Json(updated))
}
