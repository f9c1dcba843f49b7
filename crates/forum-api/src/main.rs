//! Forum moderation API server entry point
//!
//! Run with:
//! ```bash
//! STORE_BACKEND=memory API_PORT=8080 cargo run -p forum-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use forum_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        backend = ?config.store,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = forum_api::run(config).await {
        error!(error = %e, code = e.error_code(), "Server failed");
        std::process::exit(1);
    }
}
