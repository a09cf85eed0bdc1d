use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use truststack_console::logging::{self, LogTarget};
use truststack_console::model::{ConfigOverrides, ConsoleConfig};
use truststack_console::remote::ApiClient;

use crate::Commands;

#[derive(Parser)]
#[command(name = "truststack-console")]
#[command(about = "Compliance project console", long_about = None)]
pub(crate) struct Cli {
    /// API base URL [env: TRUSTSTACK_API_BASE]
    #[arg(long, global = true, value_name = "URL")]
    api_base: Option<String>,

    /// JSON config file [env: TRUSTSTACK_CONFIG]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Acting user, sent as x-user [env: TRUSTSTACK_USER]
    #[arg(long, global = true)]
    user: Option<String>,

    /// Request timeout [env: TRUSTSTACK_TIMEOUT_SECS]
    #[arg(long, global = true, value_name = "N")]
    timeout_secs: Option<u64>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = match &cli.command {
        Commands::Open(args) => match &args.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Off,
        },
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target)?;

    let config = ConsoleConfig::resolve(
        cli.config.as_deref(),
        ConfigOverrides {
            api_base: cli.api_base,
            user: cli.user,
            timeout_secs: cli.timeout_secs,
        },
    )
    .context("resolve configuration")?;
    tracing::debug!(api_base = %config.api_base, user = ?config.user, "configuration resolved");

    let client = ApiClient::new(config)?;
    crate::cli_exec::handle_command(client, cli.command)
}
