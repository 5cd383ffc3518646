//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod lookup;

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::auth::AuthManager;
use crate::cli::lookup::{print_geocode, print_location, print_news};
use crate::core::app::{local_current_year, App};
use crate::core::config::keys::ConfigKey;
use crate::core::config::Config;
use crate::core::gateway::{GatewaySettings, GeminiGateway};
use crate::ui::explore_loop::run_explorer;
use crate::utils::logging::init_tracing;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("VERGEN_GIT_DESCRIBE"),
    "\nbuilt: ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    "\nrustc: ",
    env!("VERGEN_RUSTC_SEMVER"),
);

#[derive(Parser)]
#[command(name = "beacon")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Explore good news across places and years from your terminal")]
#[command(
    long_about = "Beacon is a full-screen terminal explorer. Pick a place on a world map or by \
name, pick a year between 1950 and 2031, and read positive local dispatches found by a \
Gemini model.\n\n\
Authentication:\n\
  Use 'beacon auth' to store a Gemini API key in your system keyring.\n\n\
Environment Variables (checked before the keyring):\n\
  GEMINI_API_KEY    Your Gemini API key\n\
  API_KEY           Alternative name for the same key\n\
  BEACON_LOG        Log filter directive used with --log (e.g. beacon=debug)\n\n\
Controls:\n\
  Enter             Explore from the landing screen, search, or pin a map point\n\
  Tab/Shift+Tab     Move focus between search, years and map\n\
  1-9               Quick-pick a place\n\
  Left/Right        Step through years, or move the map reticle\n\
  PgUp/PgDn         Scroll dispatches\n\
  Esc               Back to the landing screen\n\
  Ctrl+C            Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model to use for this run instead of the configured one
    #[arg(short = 'm', long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Write diagnostics to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive explorer (default)
    Explore,
    /// Resolve a place name to coordinates
    Locate {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print good-news dispatches for a place and year
    News {
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,
        /// Year to search, 1950-2031
        #[arg(short = 'y', long)]
        year: i32,
    },
    /// Name the place at a coordinate
    Geocode {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Store a Gemini API key in the system keyring
    Auth,
    /// Remove the stored Gemini API key
    Deauth,
    /// Set configuration values, or print them when no value is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key (quick-picks are separated by ';')
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _logging = init_tracing(args.log.as_deref())?;

    match args.command.unwrap_or(Commands::Explore) {
        Commands::Auth => {
            let auth_manager = AuthManager::new();
            if let Err(e) = auth_manager.interactive_auth() {
                eprintln!("❌ Authentication failed: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Deauth => {
            let auth_manager = AuthManager::new();
            if let Err(e) = auth_manager.interactive_deauth() {
                eprintln!("❌ Deauthentication failed: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            let Some(key) = key.filter(|_| !value.is_empty()) else {
                Config::load()?.print_all();
                return Ok(());
            };
            let key = match ConfigKey::from_str(&key) {
                Ok(key) => key,
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            };
            let value = value.join(" ");
            match Config::mutate(|config| config.set_key(key, &value).map_err(Into::into)) {
                Ok(message) => println!("✅ {message}"),
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let key = match ConfigKey::from_str(&key) {
                Ok(key) => key,
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            };
            let message = Config::mutate(|config| Ok(config.unset_key(key)))?;
            println!("✅ {message}");
            Ok(())
        }
        Commands::Locate { query } => {
            let (gateway, _) = build_gateway(args.model.as_deref())?;
            print_location(&gateway, &query.join(" ")).await
        }
        Commands::News { location, year } => {
            let (gateway, _) = build_gateway(args.model.as_deref())?;
            print_news(&gateway, &location.join(" "), year, local_current_year()).await
        }
        Commands::Geocode { lat, lng } => {
            let (gateway, _) = build_gateway(args.model.as_deref())?;
            print_geocode(&gateway, lat, lng).await
        }
        Commands::Explore => {
            let (gateway, settings) = build_gateway(args.model.as_deref())?;
            let config = Config::load()?;
            let app = App::new(&config, local_current_year());
            run_explorer(app, Arc::new(gateway), settings.request_timeout).await
        }
    }
}

/// Combine the stored config, the `--model` override and the API key.
pub fn gateway_settings(
    config: &Config,
    model_override: Option<&str>,
    api_key: String,
) -> GatewaySettings {
    let model = model_override
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .unwrap_or_else(|| config.effective_model());
    GatewaySettings {
        base_url: config.effective_base_url().to_string(),
        model: model.to_string(),
        api_key,
        web_search: config.web_search_enabled(),
        request_timeout: config.request_timeout(),
    }
}

fn build_gateway(
    model_override: Option<&str>,
) -> Result<(GeminiGateway, GatewaySettings), Box<dyn Error>> {
    let config = Config::load()?;
    let resolved = AuthManager::new().resolve_api_key()?;
    let settings = gateway_settings(&config, model_override, resolved.key);
    tracing::info!(
        model = %settings.model,
        base_url = %settings.base_url,
        key_source = %resolved.source,
        "gateway configured"
    );
    let gateway = GeminiGateway::from_settings(&settings)?;
    Ok((gateway, settings))
}
