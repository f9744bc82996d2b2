use clap::Parser;

use vcds_logview::cli::{self, Cli};
use vcds_logview::config::AppConfig;
use vcds_logview::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let _log_guard = logging::init(&config);

    cli::run(cli, config).await
}
