use clap::Parser;
use userhub_core::domain::common::{DatabaseConfig, UserHubConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "userhub-api", about = "UserHub HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Emit logs as JSON.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Records per page for the paginated user listing.
    #[arg(long = "page-size", env = "PAGE_SIZE", default_value_t = 10)]
    pub page_size: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(
        id = "db_host",
        long = "db-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "db_port",
        long = "db-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(
        id = "db_user",
        long = "db-user",
        env = "DATABASE_USER",
        default_value = "postgres"
    )]
    pub username: String,

    #[arg(
        id = "db_password",
        long = "db-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(
        id = "db_name",
        long = "db-name",
        env = "DATABASE_NAME",
        default_value = "userhub"
    )]
    pub name: String,
}

impl From<Args> for UserHubConfig {
    fn from(args: Args) -> Self {
        UserHubConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            page_size: args.server.page_size,
        }
    }
}
