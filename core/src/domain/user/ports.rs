use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{
            AddUserRoleInput, CreateUserInput, CreateUserRequest, GetUsersFilter, UpdateUserInput,
            UpdateUserRequest,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_users(
        &self,
        input: GetUsersFilter,
    ) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn get_user(&self, user_id: i32) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn create_user(
        &self,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user(&self, user_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_user_role(
        &self,
        input: AddUserRoleInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Fetches every user with roles eagerly loaded, in id order.
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn get_user_by_id(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_user_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        request: UpdateUserRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    /// Deletes by id, returning the number of rows removed.
    fn delete_user(&self, user_id: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn add_user_role(
        &self,
        user_id: i32,
        role_id: i32,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
