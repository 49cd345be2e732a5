use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdateUserValidator;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use userhub_core::domain::user::entities::User;
use userhub_core::domain::user::ports::UserService;
use userhub_core::domain::user::value_objects::UpdateUserInput;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateUserResponse {
    pub data: User,
}

#[utoipa::path(
    put,
    path = "/{user_id}",
    tag = "user",
    summary = "Update user",
    description = "Replaces a user's fields and role set wholesale. The email must not belong to another user.",
    params(
        ("user_id" = i32, Path, description = "User id"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = UpdateUserResponse),
        (status = 400, description = "Invalid field or email held by another user"),
        (status = 404, description = "No user with this id")
    ),
)]
pub async fn update_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<UpdateUserResponse>, ApiError> {
    let user = state
        .service
        .update_user(UpdateUserInput {
            user_id,
            name: payload.name,
            age: payload.age,
            email: payload.email,
            role_ids: payload.roles.iter().map(|role| role.id).collect(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateUserResponse { data: user }))
}
