use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::CreateUserValidator;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use userhub_core::domain::user::entities::User;
use userhub_core::domain::user::ports::UserService;
use userhub_core::domain::user::value_objects::CreateUserInput;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateUserResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create user",
    description = "Creates a user. The email must not be in use; unknown role references are dropped.",
    request_body = CreateUserValidator,
    responses(
        (status = 200, body = CreateUserResponse),
        (status = 400, description = "Invalid field or email already in use")
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<CreateUserResponse>, ApiError> {
    let user = state
        .service
        .create_user(CreateUserInput {
            name: payload.name,
            age: payload.age,
            email: payload.email,
            role_ids: payload.roles.iter().map(|role| role.id).collect(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CreateUserResponse { data: user }))
}
