use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use trendcast::logging::init_logging;
use trendcast::{Commands, Container, ContainerConfig, Router, ThemeArg};

#[derive(Parser)]
#[command(name = "trendcast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file (the interactive view defaults to trendcast.log in the temp dir)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Use canned predictions instead of calling the Gemini API
    #[arg(long, global = true)]
    mock: bool,

    #[arg(long, global = true, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    let interactive = matches!(command, Commands::Tui);

    init_logging(cli.verbose, cli.log_file.as_deref(), interactive)?;

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        theme: cli.theme.into(),
    })?;
    debug!("Prediction backend: {}", container.client_name());

    let router = Router::new(&container);
    let output = router.route(command).await?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
