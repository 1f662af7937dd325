/**
 * Contactbox Server Entry Point
 *
 * Loads the environment, initializes tracing (to the configured log file in
 * append mode, or stderr), connects to the database and serves the API.
 * Configuration or connection failure aborts here; nothing is served.
 */

use contactbox::server::{config, create_app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let server_config = config::ServerConfig::from_env()?;
    init_tracing(&server_config)?;

    tracing::info!("Server initialization started");

    let pool = config::connect_database(&server_config.database_url).await?;
    let app = create_app(pool.clone());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Server is running on port {}...", server_config.port);
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the store connection before exiting
    pool.close().await;
    tracing::info!("Server shut down");

    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Writes to the `LOG_FILE` path in append mode when configured, stderr
/// otherwise. Level filtering follows `RUST_LOG`, defaulting to `info`.
fn init_tracing(server_config: &config::ServerConfig) -> Result<(), config::StartupError> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter));

    match &server_config.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| config::StartupError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            builder
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            builder.with_writer(std::io::stderr).init();
        }
    }

    Ok(())
}

/// Resolve when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
    }
}
