use std::sync::{Arc, Mutex};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::ConfigService;
use crate::interfaces::http::{start_server, LogEntry};

pub async fn run() -> std::io::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let config = ConfigService::new().load().map_err(|err| {
        eprintln!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let logs: Arc<Mutex<Vec<LogEntry>>> = Arc::new(Mutex::new(Vec::new()));
    let server = start_server(&config, logs).map_err(|err| {
        error!(
            error = %err,
            host = %config.host,
            port = config.port,
            "Failed to bind HTTP server"
        );
        err
    })?;

    info!(
        "Test case generator listening on http://{}:{}",
        config.host, config.port
    );
    server.await
}
