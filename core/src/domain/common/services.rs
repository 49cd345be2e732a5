use crate::domain::common::UserHubConfig;

/// Application service carrying the repository adapters and runtime
/// configuration. Domain operations are implemented on this struct in the
/// `services` module of each domain.
#[derive(Debug, Clone)]
pub struct Service<U, R> {
    pub user_repository: U,
    pub role_repository: R,
    pub config: UserHubConfig,
}

impl<U, R> Service<U, R> {
    pub fn new(user_repository: U, role_repository: R, config: UserHubConfig) -> Self {
        Self {
            user_repository,
            role_repository,
            config,
        }
    }
}
