use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select, SqlErr, TransactionTrait,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        ports::UserRepository,
        value_objects::{CreateUserRequest, UpdateUserRequest},
    },
};
use crate::entity::roles::Entity as RoleEntity;
use crate::entity::user_roles::{self, Column as UserRoleColumn, Entity as UserRoleEntity};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn one_with_roles(&self, query: Select<UserEntity>) -> Result<Option<User>, CoreError> {
        let rows = query
            .find_with_related(RoleEntity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().next().map(User::from))
    }
}

/// Insert/update failures on the users table. A unique violation can only
/// come from the email constraint, so it surfaces as a validation error
/// instead of a 500 when two writers race past the service-level check.
fn map_user_write_err(e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CoreError::Validation("email is already in use".to_string())
        }
        _ => {
            error!("Failed to write user: {}", e);
            CoreError::InternalServerError
        }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn fetch_users(&self) -> Result<Vec<User>, CoreError> {
        let rows = UserEntity::find()
            .find_with_related(RoleEntity)
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch users: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, CoreError> {
        self.one_with_roles(UserEntity::find().filter(UserColumn::Id.eq(user_id)))
            .await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        self.one_with_roles(UserEntity::find().filter(UserColumn::Email.eq(email)))
            .await
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let model = UserActiveModel {
            id: NotSet,
            name: Set(request.name),
            age: Set(request.age),
            email: Set(request.email),
        }
        .insert(&txn)
        .await
        .map_err(map_user_write_err)?;

        for role_id in request.role_ids {
            user_roles::ActiveModel {
                user_id: Set(model.id),
                role_id: Set(role_id),
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                error!("Failed to attach role {}: {}", role_id, e);
                CoreError::InternalServerError
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit user creation: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_user_by_id(model.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let model = UserActiveModel {
            id: Set(request.user_id),
            name: Set(request.name),
            age: Set(request.age),
            email: Set(request.email),
        }
        .update(&txn)
        .await
        .map_err(|e| {
            if matches!(e, DbErr::RecordNotUpdated) {
                return CoreError::NotFound;
            }
            map_user_write_err(e)
        })?;

        // The role set is replaced wholesale.
        UserRoleEntity::delete_many()
            .filter(UserRoleColumn::UserId.eq(model.id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear roles: {}", e);
                CoreError::InternalServerError
            })?;

        for role_id in request.role_ids {
            user_roles::ActiveModel {
                user_id: Set(model.id),
                role_id: Set(role_id),
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                error!("Failed to attach role {}: {}", role_id, e);
                CoreError::InternalServerError
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit user update: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_user_by_id(model.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn delete_user(&self, user_id: i32) -> Result<u64, CoreError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn add_user_role(&self, user_id: i32, role_id: i32) -> Result<User, CoreError> {
        // Do-nothing on conflict keeps concurrent retries idempotent.
        UserRoleEntity::insert(user_roles::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
        })
        .on_conflict(
            OnConflict::columns([UserRoleColumn::UserId, UserRoleColumn::RoleId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to attach role {}: {}", role_id, e);
            CoreError::InternalServerError
        })?;

        self.get_user_by_id(user_id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }
}
