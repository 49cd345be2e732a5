use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, role::entities::Role};

#[cfg_attr(test, mockall::automock)]
pub trait RoleRepository: Send + Sync {
    fn get_role_by_id(
        &self,
        role_id: i32,
    ) -> impl Future<Output = Result<Option<Role>, CoreError>> + Send;

    fn fetch_roles(&self) -> impl Future<Output = Result<Vec<Role>, CoreError>> + Send;
}
