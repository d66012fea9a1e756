mod api;
mod cli_messages;
mod config;
mod consts;
mod error_classifier;
mod events;
mod logging;
mod models;
mod session;
mod ui;
mod workers;

use crate::api::{ReviewApi, ReviewApiClient, SampleApi};
use crate::config::{Config, get_config_path, resolve_base_url, validate_api_url};
use crate::consts::cli_consts::API_URL_ENV_VAR;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Dashboard for AI code review metrics and recent reviews
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Start {
        /// Base URL of the review service. Overrides REVIEW_DASHBOARD_API_URL and the config file.
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print events and the final view to stdout instead of opening the terminal UI
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Show built-in sample data instead of contacting the service
        #[arg(long, default_value_t = false)]
        sample_data: bool,

        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Save the review service base URL to the config file
    SetApiUrl {
        /// Absolute http(s) URL, e.g. http://localhost:8000
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the config file and return to defaults
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            headless,
            sample_data,
            with_background,
        } => {
            let api: Arc<dyn ReviewApi> = if sample_data {
                Arc::new(SampleApi::new())
            } else {
                let config_path = get_config_path()?;
                let config = match Config::load_if_exists(&config_path) {
                    Ok(config) => config,
                    Err(e) => {
                        crate::print_cmd_error!(
                            "Ignoring unreadable config file",
                            &e.to_string()
                        );
                        None
                    }
                };
                let env_url = std::env::var(API_URL_ENV_VAR).ok();
                let base_url =
                    resolve_base_url(api_url.as_deref(), env_url.as_deref(), config.as_ref());
                Arc::new(ReviewApiClient::new(base_url)?)
            };

            let session = setup_session(api);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::SetApiUrl { url } => {
            let url = match validate_api_url(&url) {
                Ok(url) => url,
                Err(e) => {
                    crate::print_cmd_error!("Failed to set API URL", &e.to_string());
                    return Err(e.into());
                }
            };
            let config_path = get_config_path()?;
            Config::new(url.clone()).save(&config_path)?;
            crate::print_cmd_success!("API URL saved", "{}", url);
            Ok(())
        }
        Command::Reset => {
            let config_path = get_config_path()?;
            crate::print_cmd_info!("Resetting configuration", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
