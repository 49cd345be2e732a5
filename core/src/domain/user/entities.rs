use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::role::entities::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    /// Attached reference roles, set semantics. Always loaded eagerly.
    pub roles: Vec<Role>,
}
