use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    role::ports::RoleRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::{
            AddUserRoleInput, CreateUserInput, CreateUserRequest, GetUsersFilter, SortDirection,
            SortKey, UpdateUserInput, UpdateUserRequest, UserFilter,
        },
    },
};

impl<U, R> UserService for Service<U, R>
where
    U: UserRepository,
    R: RoleRepository,
{
    async fn get_users(&self, input: GetUsersFilter) -> Result<Vec<User>, CoreError> {
        // Parameters are validated before any data is fetched.
        let direction = match input.sort_dir.as_deref() {
            Some(raw) => raw.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };
        let key = SortKey::resolve(input.sort_by.as_deref());
        if let Some(page) = input.page {
            if page <= 0 {
                return Err(CoreError::Validation(
                    "page must be a positive integer".to_string(),
                ));
            }
        }

        let users = self.user_repository.fetch_users().await?;
        let users = apply_listing(
            users,
            &input.filter,
            key,
            direction,
            input.page,
            self.config.page_size,
        );

        if users.is_empty() {
            // An empty result set is reported as not-found rather than an
            // empty 200 list, preserving the original contract.
            return Err(CoreError::NotFound);
        }

        Ok(users)
    }

    async fn get_user(&self, user_id: i32) -> Result<User, CoreError> {
        self.user_repository
            .get_user_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        if self
            .user_repository
            .get_user_by_email(&input.email)
            .await?
            .is_some()
        {
            return Err(CoreError::Validation(format!(
                "email {} is already in use",
                input.email
            )));
        }

        let role_ids = resolve_role_ids(&self.role_repository, input.role_ids).await?;

        self.user_repository
            .create_user(CreateUserRequest {
                name: input.name,
                age: input.age,
                email: input.email,
                role_ids,
            })
            .await
    }

    async fn update_user(&self, input: UpdateUserInput) -> Result<User, CoreError> {
        let existing = self
            .user_repository
            .get_user_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        // Uniqueness is checked against the proposed new email, excluding the
        // record being updated itself.
        if let Some(holder) = self.user_repository.get_user_by_email(&input.email).await? {
            if holder.id != existing.id {
                return Err(CoreError::Validation(format!(
                    "email {} is already in use",
                    input.email
                )));
            }
        }

        let role_ids = resolve_role_ids(&self.role_repository, input.role_ids).await?;

        self.user_repository
            .update_user(UpdateUserRequest {
                user_id: input.user_id,
                name: input.name,
                age: input.age,
                email: input.email,
                role_ids,
            })
            .await
    }

    async fn delete_user(&self, user_id: i32) -> Result<(), CoreError> {
        let deleted = self.user_repository.delete_user(user_id).await?;
        if deleted == 0 {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    async fn add_user_role(&self, input: AddUserRoleInput) -> Result<User, CoreError> {
        let user = self
            .user_repository
            .get_user_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let role = self
            .role_repository
            .get_role_by_id(input.role_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if role.name != input.role_name {
            return Err(CoreError::Validation(format!(
                "role {} does not match the reference role named {}",
                input.role_name, role.name
            )));
        }

        if user.roles.iter().any(|attached| attached.id == role.id) {
            // Already attached. Retries must not accumulate duplicates.
            return Ok(user);
        }

        self.user_repository
            .add_user_role(input.user_id, input.role_id)
            .await
    }
}

/// Filters submitted role ids down to ids present in the reference table,
/// collapsing duplicates. Unknown ids are dropped, not rejected.
async fn resolve_role_ids<R: RoleRepository>(
    role_repository: &R,
    submitted: Vec<i32>,
) -> Result<Vec<i32>, CoreError> {
    let known = role_repository
        .fetch_roles()
        .await?
        .iter()
        .map(|role| role.id)
        .collect::<Vec<i32>>();

    let mut resolved = Vec::new();
    for role_id in submitted {
        if known.contains(&role_id) && !resolved.contains(&role_id) {
            resolved.push(role_id);
        }
    }
    Ok(resolved)
}

/// Applies the listing stages in a fixed order: filter, sort, paginate.
fn apply_listing(
    users: Vec<User>,
    filter: &UserFilter,
    key: SortKey,
    direction: SortDirection,
    page: Option<i64>,
    page_size: u64,
) -> Vec<User> {
    let mut users = users
        .into_iter()
        .filter(|user| filter.matches(user))
        .collect::<Vec<User>>();

    users.sort_by(|a, b| match direction {
        SortDirection::Asc => key.compare(a, b),
        SortDirection::Desc => key.compare(a, b).reverse(),
    });

    paginate(users, page, page_size)
}

/// Pages are 1-based and sized by configuration. An absent page returns the
/// whole collection, unbounded.
fn paginate(users: Vec<User>, page: Option<i64>, page_size: u64) -> Vec<User> {
    match page {
        Some(page) => {
            let offset = usize::try_from((page - 1).saturating_mul(page_size as i64))
                .unwrap_or(usize::MAX);
            users
                .into_iter()
                .skip(offset)
                .take(page_size as usize)
                .collect()
        }
        None => users,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{DatabaseConfig, UserHubConfig};
    use crate::domain::role::entities::Role;
    use crate::domain::role::ports::MockRoleRepository;
    use crate::domain::user::ports::MockUserRepository;
    use mockall::predicate::eq;

    fn config(page_size: u64) -> UserHubConfig {
        UserHubConfig {
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                username: "postgres".to_string(),
                password: "postgres".to_string(),
                name: "userhub".to_string(),
            },
            page_size,
        }
    }

    fn role(id: i32, name: &str) -> Role {
        Role {
            id,
            name: name.to_string(),
        }
    }

    fn reference_roles() -> Vec<Role> {
        vec![
            role(1, "User"),
            role(2, "Admin"),
            role(3, "Support"),
            role(4, "SuperAdmin"),
        ]
    }

    fn user(id: i32, name: &str, age: i32, email: &str, roles: Vec<Role>) -> User {
        User {
            id,
            name: name.to_string(),
            age,
            email: email.to_string(),
            roles,
        }
    }

    fn seed_users() -> Vec<User> {
        vec![
            user(1, "Alice", 30, "alice@example.com", vec![role(2, "Admin")]),
            user(2, "Bob", 25, "bob@example.com", vec![role(1, "User")]),
            user(
                3,
                "Carol",
                30,
                "carol@example.com",
                vec![role(1, "User"), role(3, "Support")],
            ),
            user(4, "Dave", 41, "dave@example.com", vec![]),
        ]
    }

    fn service_with(
        user_repository: MockUserRepository,
        role_repository: MockRoleRepository,
        page_size: u64,
    ) -> Service<MockUserRepository, MockRoleRepository> {
        Service::new(user_repository, role_repository, config(page_size))
    }

    fn listing(filter: UserFilter) -> GetUsersFilter {
        GetUsersFilter {
            filter,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn filters_combine_conjunctively_and_never_grow_the_result() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_fetch_users()
            .returning(|| Box::pin(async { Ok(seed_users()) }));
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        let by_age = service
            .get_users(listing(UserFilter {
                age: Some(30),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(
            by_age.iter().map(|u| u.id).collect::<Vec<i32>>(),
            vec![1, 3]
        );

        let by_age_and_role = service
            .get_users(listing(UserFilter {
                age: Some(30),
                role_name: Some("Support".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(
            by_age_and_role.iter().map(|u| u.id).collect::<Vec<i32>>(),
            vec![3]
        );
        assert!(by_age_and_role.len() <= by_age.len());
    }

    #[tokio::test]
    async fn sorting_by_age_descending_reverses_the_ascending_order() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_fetch_users()
            .returning(|| Box::pin(async { Ok(seed_users()) }));
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        let ascending = service
            .get_users(GetUsersFilter {
                sort_by: Some("age".to_string()),
                sort_dir: Some("asc".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let descending = service
            .get_users(GetUsersFilter {
                sort_by: Some("age".to_string()),
                sort_dir: Some("desc".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(
            ascending.iter().map(|u| u.id).collect::<Vec<i32>>(),
            vec![2, 1, 3, 4]
        );
        let mut reversed = descending;
        reversed.reverse();
        assert_eq!(ascending, reversed);
    }

    #[tokio::test]
    async fn pages_partition_the_sorted_sequence() {
        let many: Vec<User> = (1..=25)
            .map(|id| {
                user(
                    id,
                    &format!("User{id}"),
                    20 + id,
                    &format!("user{id}@example.com"),
                    vec![],
                )
            })
            .collect();

        let mut user_repository = MockUserRepository::new();
        let fetched = many.clone();
        user_repository
            .expect_fetch_users()
            .returning(move || {
                let fetched = fetched.clone();
                Box::pin(async move { Ok(fetched) })
            });
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        let mut collected = Vec::new();
        for page in 1..=3 {
            let page_users = service
                .get_users(GetUsersFilter {
                    page: Some(page),
                    ..Default::default()
                })
                .await
                .unwrap();
            assert!(page_users.len() <= 10);
            collected.extend(page_users);
        }

        assert_eq!(collected, many);
    }

    #[tokio::test]
    async fn non_positive_pages_are_rejected_before_any_fetch() {
        // No fetch expectation: reaching the repository would panic the mock.
        let service = service_with(MockUserRepository::new(), MockRoleRepository::new(), 10);

        for page in [0, -1] {
            let result = service
                .get_users(GetUsersFilter {
                    page: Some(page),
                    ..Default::default()
                })
                .await;
            assert!(matches!(result, Err(CoreError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn malformed_sort_direction_is_rejected_before_any_fetch() {
        let service = service_with(MockUserRepository::new(), MockRoleRepository::new(), 10);

        let result = service
            .get_users(GetUsersFilter {
                sort_dir: Some("upwards".to_string()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn empty_filtered_result_reports_not_found() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_fetch_users()
            .returning(|| Box::pin(async { Ok(seed_users()) }));
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        let result = service
            .get_users(listing(UserFilter {
                age: Some(99),
                ..Default::default()
            }))
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn create_with_taken_email_is_rejected_without_writing() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_user_by_email()
            .with(eq("alice@example.com"))
            .returning(|_| {
                Box::pin(async {
                    Ok(Some(user(
                        1,
                        "Alice",
                        30,
                        "alice@example.com",
                        vec![],
                    )))
                })
            });
        user_repository.expect_create_user().never();
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        let result = service
            .create_user(CreateUserInput {
                name: "Impostor".to_string(),
                age: 22,
                email: "alice@example.com".to_string(),
                role_ids: vec![],
            })
            .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn create_drops_unknown_roles_and_collapses_duplicates() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_user_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));
        user_repository
            .expect_create_user()
            .withf(|request: &CreateUserRequest| request.role_ids == vec![2])
            .returning(|request| {
                Box::pin(async move {
                    Ok(user(
                        5,
                        &request.name,
                        request.age,
                        &request.email,
                        vec![role(2, "Admin")],
                    ))
                })
            });

        let mut role_repository = MockRoleRepository::new();
        role_repository
            .expect_fetch_roles()
            .returning(|| Box::pin(async { Ok(reference_roles()) }));

        let service = service_with(user_repository, role_repository, 10);
        let created = service
            .create_user(CreateUserInput {
                name: "Erin".to_string(),
                age: 28,
                email: "erin@example.com".to_string(),
                role_ids: vec![2, 99, 2],
            })
            .await
            .unwrap();
        assert_eq!(created.roles, vec![role(2, "Admin")]);
    }

    #[tokio::test]
    async fn update_of_missing_user_reports_not_found() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_user_by_id()
            .with(eq(9999))
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        let result = service
            .update_user(UpdateUserInput {
                user_id: 9999,
                name: "Ghost".to_string(),
                age: 30,
                email: "ghost@example.com".to_string(),
                role_ids: vec![],
            })
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn update_may_keep_its_own_email() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_user_by_id()
            .with(eq(1))
            .returning(|_| Box::pin(async { Ok(Some(user(1, "Alice", 30, "alice@example.com", vec![]))) }));
        user_repository
            .expect_get_user_by_email()
            .with(eq("alice@example.com"))
            .returning(|_| Box::pin(async { Ok(Some(user(1, "Alice", 30, "alice@example.com", vec![]))) }));
        user_repository
            .expect_update_user()
            .returning(|request| {
                Box::pin(async move {
                    Ok(user(
                        request.user_id,
                        &request.name,
                        request.age,
                        &request.email,
                        vec![],
                    ))
                })
            });

        let mut role_repository = MockRoleRepository::new();
        role_repository
            .expect_fetch_roles()
            .returning(|| Box::pin(async { Ok(reference_roles()) }));

        let service = service_with(user_repository, role_repository, 10);
        let updated = service
            .update_user(UpdateUserInput {
                user_id: 1,
                name: "Alice".to_string(),
                age: 31,
                email: "alice@example.com".to_string(),
                role_ids: vec![],
            })
            .await
            .unwrap();
        assert_eq!(updated.age, 31);
    }

    #[tokio::test]
    async fn update_to_an_email_held_by_another_user_is_rejected() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_user_by_id()
            .with(eq(1))
            .returning(|_| Box::pin(async { Ok(Some(user(1, "Alice", 30, "alice@example.com", vec![]))) }));
        user_repository
            .expect_get_user_by_email()
            .with(eq("bob@example.com"))
            .returning(|_| Box::pin(async { Ok(Some(user(2, "Bob", 25, "bob@example.com", vec![]))) }));
        user_repository.expect_update_user().never();
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        let result = service
            .update_user(UpdateUserInput {
                user_id: 1,
                name: "Alice".to_string(),
                age: 30,
                email: "bob@example.com".to_string(),
                role_ids: vec![],
            })
            .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn attaching_an_already_held_role_is_a_noop() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_user_by_id()
            .with(eq(1))
            .returning(|_| {
                Box::pin(async {
                    Ok(Some(user(
                        1,
                        "Alice",
                        30,
                        "alice@example.com",
                        vec![role(2, "Admin")],
                    )))
                })
            });
        user_repository.expect_add_user_role().never();

        let mut role_repository = MockRoleRepository::new();
        role_repository
            .expect_get_role_by_id()
            .with(eq(2))
            .returning(|_| Box::pin(async { Ok(Some(role(2, "Admin"))) }));

        let service = service_with(user_repository, role_repository, 10);
        let unchanged = service
            .add_user_role(AddUserRoleInput {
                user_id: 1,
                role_id: 2,
                role_name: "Admin".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(unchanged.roles, vec![role(2, "Admin")]);
    }

    #[tokio::test]
    async fn attaching_a_role_with_a_mismatched_name_is_rejected() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_user_by_id()
            .returning(|_| Box::pin(async { Ok(Some(user(1, "Alice", 30, "alice@example.com", vec![]))) }));

        let mut role_repository = MockRoleRepository::new();
        role_repository
            .expect_get_role_by_id()
            .with(eq(2))
            .returning(|_| Box::pin(async { Ok(Some(role(2, "Admin"))) }));

        let service = service_with(user_repository, role_repository, 10);
        let result = service
            .add_user_role(AddUserRoleInput {
                user_id: 1,
                role_id: 2,
                role_name: "Administrator".to_string(),
            })
            .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn attaching_an_unknown_role_reports_not_found() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_get_user_by_id()
            .returning(|_| Box::pin(async { Ok(Some(user(1, "Alice", 30, "alice@example.com", vec![]))) }));

        let mut role_repository = MockRoleRepository::new();
        role_repository
            .expect_get_role_by_id()
            .with(eq(42))
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service_with(user_repository, role_repository, 10);
        let result = service
            .add_user_role(AddUserRoleInput {
                user_id: 1,
                role_id: 42,
                role_name: "Overlord".to_string(),
            })
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn deleting_a_missing_user_reports_not_found() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_delete_user()
            .with(eq(9999))
            .returning(|_| Box::pin(async { Ok(0) }));
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        assert_eq!(service.delete_user(9999).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn deleting_an_existing_user_succeeds() {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_delete_user()
            .with(eq(1))
            .returning(|_| Box::pin(async { Ok(1) }));
        let service = service_with(user_repository, MockRoleRepository::new(), 10);

        assert_eq!(service.delete_user(1).await, Ok(()));
    }
}
