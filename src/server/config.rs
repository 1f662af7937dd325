/**
 * Server Configuration
 *
 * Loads the environment configuration and builds the database pool. All of
 * it is read once at startup; any failure here is fatal and the process
 * aborts before serving anything.
 *
 * # Environment Variables
 *
 * - `DATABASE_URL` - connection URI for the message store (required;
 *   database name and credentials ride in the URI)
 * - `SERVER_PORT`  - HTTP port, defaults to 8080
 * - `LOG_FILE`     - optional path for the append-mode log file; logs go
 *   to stderr when unset
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

/// How long to wait for the initial database connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fatal startup failures. Nothing is served after one of these.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),

    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },
}

/// Server configuration read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub log_file: Option<String>,
}

impl ServerConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, StartupError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| StartupError::MissingDatabaseUrl)?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| StartupError::InvalidPort(raw))?,
            Err(_) => 8080,
        };

        let log_file = std::env::var("LOG_FILE").ok();

        Ok(Self {
            database_url,
            port,
            log_file,
        })
    }
}

/// Connect to the database and run migrations.
///
/// The pool is the process-wide store connection: acquired here, passed
/// down through `AppState`, and closed on shutdown by `main`.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(StartupError::Connect)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect_with(options)
        .await
        .map_err(StartupError::Connect)?;

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}
