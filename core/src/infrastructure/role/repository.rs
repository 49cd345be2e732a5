use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    role::{entities::Role, ports::RoleRepository},
};
use crate::entity::roles::{Column as RoleColumn, Entity as RoleEntity};

#[derive(Debug, Clone)]
pub struct PostgresRoleRepository {
    pub db: DatabaseConnection,
}

impl PostgresRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RoleRepository for PostgresRoleRepository {
    async fn get_role_by_id(&self, role_id: i32) -> Result<Option<Role>, CoreError> {
        let role = RoleEntity::find_by_id(role_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get role by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Role::from);

        Ok(role)
    }

    async fn fetch_roles(&self) -> Result<Vec<Role>, CoreError> {
        let roles = RoleEntity::find()
            .order_by_asc(RoleColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch roles: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Role::from)
            .collect();

        Ok(roles)
    }
}
