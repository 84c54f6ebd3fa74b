mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use signup_form::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Registration form validation", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "signup.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a registration record stored as JSON and submit it
    Validate {
        /// Path to the record (camelCase field names)
        record: PathBuf,

        /// Do not fetch the country directory
        #[arg(long)]
        offline: bool,

        /// Calendar year for the age check instead of the current one
        #[arg(long, value_name = "YEAR")]
        as_of: Option<i32>,
    },

    /// Fetch and print the country directory
    Countries,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?.with_env_overrides();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Validate { record, offline, as_of } => {
            let accepted = commands::validate::execute(&config, &record, offline, as_of).await?;
            if !accepted {
                std::process::exit(1);
            }
        }
        Commands::Countries => {
            commands::countries::execute(&config).await?;
        }
    }

    Ok(())
}
