//! Framelint CLI - static analysis of pandas DataFrame column usage

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod discover;
mod format;

use cli::Cli;
use commands::check;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Result<()> = match &cli.command {
        cli::Commands::Check(args) => check::execute(args, &cli.global).await,
    };

    if let Err(err) = result {
        // Check if this is an ExitCode (structured exit, not a real error)
        if let Some(exit_code) = err.downcast_ref::<commands::common::ExitCode>() {
            std::process::exit(exit_code.0);
        }
        // Real error: print and exit 2
        eprintln!("Error: {:?}", err);
        std::process::exit(2);
    }
}
