use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::RoleReferenceValidator;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use userhub_core::domain::user::entities::User;
use userhub_core::domain::user::ports::UserService;
use userhub_core::domain::user::value_objects::AddUserRoleInput;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddUserRoleResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "/{user_id}/role",
    tag = "user",
    summary = "Attach role",
    description = "Attaches a reference role to a user. The payload must match the reference role exactly; attaching an already held role is a no-op.",
    params(
        ("user_id" = i32, Path, description = "User id"),
    ),
    request_body = RoleReferenceValidator,
    responses(
        (status = 200, body = AddUserRoleResponse),
        (status = 400, description = "Payload does not match the reference role"),
        (status = 404, description = "No such user or role")
    ),
)]
pub async fn add_user_role(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RoleReferenceValidator>,
) -> Result<Response<AddUserRoleResponse>, ApiError> {
    let user = state
        .service
        .add_user_role(AddUserRoleInput {
            user_id,
            role_id: payload.id,
            role_name: payload.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AddUserRoleResponse { data: user }))
}
