use crate::application::http::user::router::UserApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UserHub API"
    ),
    nest(
        (path = "/users", api = UserApiDoc),
    )
)]
pub struct ApiDoc;
