use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::app_state::build_app_state;
use crate::config::AppConfig;
use crate::core::client::log_api_client::HttpLogApiClient;
use crate::core::client::log_api_client_trait::LogApiClient;
use crate::view::controller::{LogViewController, RefreshOutcome, UploadOutcome, UploadSubmission};
use crate::view::notifier::ConsoleNotifier;

#[derive(Parser, Debug)]
#[command(name = "vcds-logview")]
#[command(version)]
#[command(about = "Upload and browse VCDS measuring-block logs")]
pub struct Cli {
    /// Log API base URL (overrides VCDS_API_BASE_URL)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the log API server
    Serve {
        /// Listen address (overrides VCDS_BIND_ADDR)
        #[arg(short = 'l', long = "listen", value_name = "ADDRESS")]
        listen: Option<String>,
    },
    /// Render the uploaded logs as cards
    List,
    /// Upload a log file, then render the refreshed list
    Upload {
        /// File to upload; without it nothing is sent
        file: Option<PathBuf>,
    },
    /// Visualize a log
    Visualize { id: i64 },
    /// Print one log as JSON
    Show { id: i64 },
    /// Print the measuring blocks of a log as JSON
    Groups { id: i64 },
    /// Delete every uploaded log
    Purge,
}

pub async fn run(cli: Cli, mut config: AppConfig) -> Result<()> {
    if let Some(url) = cli.base_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }

    match cli.command {
        Command::Serve { listen } => {
            if let Some(listen) = listen {
                config.bind_addr = listen.parse()?;
            }
            crate::server::serve(config.bind_addr, build_app_state()).await
        }
        Command::List => {
            let mut view = view_controller(&config)?;
            if view.init().await == RefreshOutcome::Failed {
                bail!("could not fetch logs from {}", config.api_base_url);
            }
            println!("{}", view.container());
            Ok(())
        }
        Command::Upload { file } => {
            let submission = match file {
                Some(path) => UploadSubmission::from_path(&path).await?,
                None => UploadSubmission::empty(),
            };

            let mut view = view_controller(&config)?;
            match view.handle_submit(submission).await {
                UploadOutcome::Uploaded => {
                    println!("{}", view.container());
                    Ok(())
                }
                UploadOutcome::NoFileSelected => Ok(()),
                UploadOutcome::Failed => bail!("upload to {} failed", config.api_base_url),
            }
        }
        Command::Visualize { id } => {
            view_controller(&config)?.visualize(id);
            Ok(())
        }
        Command::Show { id } => {
            let client = HttpLogApiClient::from_config(&config)?;
            let log = client.get_log(id).await?;
            println!("{}", serde_json::to_string_pretty(&log)?);
            Ok(())
        }
        Command::Groups { id } => {
            let client = HttpLogApiClient::from_config(&config)?;
            let groups = client.list_groups(id).await?;
            println!("{}", serde_json::to_string_pretty(&groups)?);
            Ok(())
        }
        Command::Purge => {
            let client = HttpLogApiClient::from_config(&config)?;
            let res = client.delete_all_logs().await?;
            info!(base_url = %client.base_url(), "Purged logs");
            println!("{}", serde_json::to_string_pretty(&res)?);
            Ok(())
        }
    }
}

fn view_controller(config: &AppConfig) -> Result<LogViewController<HttpLogApiClient, ConsoleNotifier>> {
    let client = HttpLogApiClient::from_config(config)?;
    Ok(LogViewController::new(client, ConsoleNotifier))
}
