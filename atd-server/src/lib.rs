//! Airport traffic dashboard server.
//!
//! Loads the traffic CSV once at startup, then serves the dashboard page and
//! the JSON figure endpoints the page's dropdown calls into.

use anyhow::Context;
use atd_db::TrafficDataset;
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use state::AppState;

/// Initialize `env_logger` at the level chosen by `--debug`. `RUST_LOG` overrides it.
pub fn init_logging(config: &Config) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .init();
}

/// Load the dataset and serve until the process is stopped.
///
/// A dataset that cannot be loaded aborts startup before the listener binds.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let dataset = TrafficDataset::load_from_path(&config.data)?;
    let state = Arc::new(AppState::new(
        dataset,
        config.map_settings(),
        &config.default_state,
    ));
    let app = routes::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    log::info!("Serving airport traffic dashboard on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
