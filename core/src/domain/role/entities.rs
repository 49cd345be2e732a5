use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reference role. The full set is seeded by migration and never mutated
/// through the API; users only hold references to these rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub id: i32,
    pub name: String,
}
