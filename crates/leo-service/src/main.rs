//! `leo-serve` — the analysis service binary.
//!
//! Usage: `leo-serve [config.toml]`. Without an argument every setting falls
//! back to its default. Log filtering respects the `LEO_LOG` environment
//! variable (default `info`).

use leo_core::config::LeoConfig;
use leo_core::errors::{LeoError, LeoResult};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LEO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn load_config() -> LeoResult<LeoConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| LeoError::Config(format!("cannot read {path}: {e}")))?;
            let config = LeoConfig::from_toml(&text)?;
            tracing::info!("loaded config from {path}");
            Ok(config)
        }
        None => {
            tracing::info!("no config given, using defaults");
            Ok(LeoConfig::default())
        }
    }
}

#[tokio::main]
async fn main() -> LeoResult<()> {
    init_tracing();
    let config = load_config()?;
    leo_service::http::serve(config).await
}
