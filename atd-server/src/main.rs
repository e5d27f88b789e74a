//! ATD server - serves the airport traffic dashboard.

use atd_server::config::Config;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    atd_server::init_logging(&config);
    atd_server::run(config).await
}
