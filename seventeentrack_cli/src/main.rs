mod commands;
mod output;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use seventeentrack_api::Client;

use crate::commands::manage::{self, Action};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "seventeentrack")]
#[command(about = "Register and track shipments through the 17track API")]
struct Cli {
    /// API key (defaults to $SEVENTEENTRACK_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API host (defaults to $SEVENTEENTRACK_HOST, then the production host)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Request timeout in seconds (at least 1)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register numbers for tracking
    Register(commands::register::RegisterArgs),
    /// Change the carrier of a tracked number
    ChangeCarrier(commands::change_carrier::ChangeCarrierArgs),
    /// Stop tracking numbers
    Stop(manage::NumbersArgs),
    /// Resume tracking of stopped numbers
    Retrack(manage::NumbersArgs),
    /// Update stored metadata of a tracked number
    ChangeInfo(commands::change_info::ChangeInfoArgs),
    /// Delete tracked numbers
    Delete(manage::NumbersArgs),
    /// Push current status to the configured webhook
    Push(manage::NumbersArgs),
    /// Show current tracking status
    Info(manage::NumbersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seventeentrack=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let config = settings::resolve_config(
        cli.api_key.as_deref(),
        cli.host.as_deref(),
        cli.timeout,
        |key| std::env::var(key).ok(),
    )?;
    let client = Client::from_config(config)?;

    match &cli.command {
        Commands::Register(args) => commands::register::run(args, &client, &format).await?,
        Commands::ChangeCarrier(args) => {
            commands::change_carrier::run(args, &client, &format).await?
        }
        Commands::Stop(args) => manage::run(Action::Stop, args, &client, &format).await?,
        Commands::Retrack(args) => manage::run(Action::ReTrack, args, &client, &format).await?,
        Commands::ChangeInfo(args) => commands::change_info::run(args, &client, &format).await?,
        Commands::Delete(args) => manage::run(Action::Delete, args, &client, &format).await?,
        Commands::Push(args) => manage::run(Action::Push, args, &client, &format).await?,
        Commands::Info(args) => commands::info::run(args, &client, &format).await?,
    }

    Ok(())
}
