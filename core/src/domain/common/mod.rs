pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct UserHubConfig {
    pub database: DatabaseConfig,
    /// Records per page for the paginated user listing.
    pub page_size: u64,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}
