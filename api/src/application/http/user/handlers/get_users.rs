use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use userhub_core::domain::user::entities::User;
use userhub_core::domain::user::ports::UserService;
use userhub_core::domain::user::value_objects::{GetUsersFilter, UserFilter};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetUsersQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    /// Matches users holding a role with this name.
    pub role: Option<String>,
    #[serde(rename = "roleId")]
    pub role_id: Option<i32>,
    /// 1-based page number. Absent means the full result set.
    pub page: Option<i64>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortDir")]
    pub sort_dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUsersResponse {
    pub data: Vec<User>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "List users",
    description = "Lists users matching every supplied filter, sorted and paginated. An empty result is reported as not found.",
    params(GetUsersQuery),
    responses(
        (status = 200, body = GetUsersResponse),
        (status = 400, description = "Malformed page or sort direction"),
        (status = 404, description = "No user matches the filters")
    ),
)]
pub async fn get_users(
    Query(query): Query<GetUsersQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetUsersResponse>, ApiError> {
    let users = state
        .service
        .get_users(GetUsersFilter {
            filter: UserFilter {
                id: query.id,
                name: query.name,
                age: query.age,
                email: query.email,
                role_name: query.role,
                role_id: query.role_id,
            },
            sort_by: query.sort_by,
            sort_dir: query.sort_dir,
            page: query.page,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUsersResponse { data: users }))
}
