mod catalog;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod filter;
mod generate;
mod output;
mod source;
mod tui;

use clap::Parser;
use cli::Command;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // TUI の代替スクリーン上ではログを出さない
    let interactive = matches!(cli.command, Command::Browse(_));
    init_logging(cli.verbose, interactive);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, interactive: bool) {
    let filter = if interactive {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("owo=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
