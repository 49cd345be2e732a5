use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use userhub_core::domain::user::entities::User;
use userhub_core::domain::user::ports::UserService;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserResponse {
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    description = "Retrieves a single user with its attached roles.",
    params(
        ("user_id" = i32, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = GetUserResponse),
        (status = 404, description = "No user with this id")
    ),
)]
pub async fn get_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<GetUserResponse>, ApiError> {
    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserResponse { data: user }))
}
