use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use userhub_core::domain::user::ports::UserService;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteUserResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{user_id}",
    tag = "user",
    summary = "Delete user",
    description = "Deletes a user and its role attachments.",
    params(
        ("user_id" = i32, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = DeleteUserResponse),
        (status = 404, description = "No user with this id")
    ),
)]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<DeleteUserResponse>, ApiError> {
    state
        .service
        .delete_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteUserResponse {
        message: format!("user {user_id} deleted"),
    }))
}
