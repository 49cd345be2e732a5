use super::handlers::add_user_role::{__path_add_user_role, add_user_role};
use super::handlers::create_user::{__path_create_user, create_user};
use super::handlers::delete_user::{__path_delete_user, delete_user};
use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::get_users::{__path_get_users, get_users};
use super::handlers::update_user::{__path_update_user, update_user};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_users, get_user, create_user, update_user, delete_user, add_user_role))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            get(get_users),
        )
        .route(
            &format!("{}/users", state.args.server.root_path),
            post(create_user),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            get(get_user),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            put(update_user),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            delete(delete_user),
        )
        .route(
            &format!("{}/users/{{user_id}}/role", state.args.server.root_path),
            post(add_user_role),
        )
}
