//! URL redirect service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ request id → trace → timeout
//!                                           │
//!                                           ▼
//!                                  ┌─────────────────┐   hit
//!                                  │  YAML table     │──────────▶ 302 Location
//!                                  └────────┬────────┘
//!                                           │ miss
//!                                           ▼
//!                                  ┌─────────────────┐   hit
//!                                  │  static table   │──────────▶ 302 Location
//!                                  └────────┬────────┘
//!                                           │ miss
//!                                           ▼
//!                                  ┌─────────────────┐
//!                                  │ default handler │──────────▶ 200 Hello, world!
//!                                  └─────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use urlshort::config::{load_config, load_paths_file, validate_config, ConfigError};
use urlshort::lifecycle::signals::spawn_signal_listener;
use urlshort::observability::init_logging;
use urlshort::{HttpServer, Shutdown, ShortenerConfig};

#[derive(Parser, Debug)]
#[command(name = "urlshort")]
#[command(about = "Redirect known paths to their URLs, greet everything else", long_about = None)]
struct Cli {
    /// YAML file with `- path: ... url: ...` entries (overrides paths.file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides listener.bind_address)
    #[arg(short, long)]
    bind: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ShortenerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ShortenerConfig::default(),
        };
        if let Some(file) = self.file {
            config.paths.file = file;
        }
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
            validate_config(&config).map_err(ConfigError::Validation)?;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    init_logging(&config.observability)?;
    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));

    let yaml = load_paths_file(&config.paths.file)?;
    tracing::info!(
        file = %config.paths.file.display(),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let server = match HttpServer::new(config, &yaml) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build redirect table");
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    spawn_signal_listener(&shutdown);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
