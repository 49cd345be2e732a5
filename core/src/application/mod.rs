use crate::domain::common::{UserHubConfig, services::Service};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    role::PostgresRoleRepository,
    user::PostgresUserRepository,
};

pub type UserHubService = Service<PostgresUserRepository, PostgresRoleRepository>;

/// Wires the Postgres-backed repositories into the application service.
pub async fn create_service(config: UserHubConfig) -> Result<UserHubService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let user_repository = PostgresUserRepository::new(postgres.get_db());
    let role_repository = PostgresRoleRepository::new(postgres.get_db());

    Ok(Service::new(user_repository, role_repository, config))
}
