// file: src/main.rs
// version: 1.0.0
// guid: 2e90c4b7-51d8-4f6a-803c-9ba7e215f0d4

//! ovpn-bulker - Main entry point

use clap::Parser;
use ovpn_bulker::{
    cli::{args::Cli, commands::*},
    logging::logger,
    Result,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    // Set up signal handling for graceful shutdown
    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting...");
    };

    let command_future = async {
        match cli.command {
            ovpn_bulker::cli::args::Commands::Install {
                directory,
                username,
                password,
                no_autoconnect,
                dry_run,
            } => install_command(&directory, &username, &password, !no_autoconnect, dry_run).await,
            ovpn_bulker::cli::args::Commands::List { json } => list_command(json).await,
            ovpn_bulker::cli::args::Commands::Connect { name } => connect_command(&name).await,
            ovpn_bulker::cli::args::Commands::Disconnect { name } => {
                disconnect_command(&name).await
            }
            ovpn_bulker::cli::args::Commands::Delete { name } => delete_command(&name).await,
            ovpn_bulker::cli::args::Commands::DeleteAll { yes, dry_run } => {
                delete_all_command(yes, dry_run).await
            }
            ovpn_bulker::cli::args::Commands::Autoconnect { name, state } => {
                autoconnect_command(&name, state.enabled()).await
            }
            ovpn_bulker::cli::args::Commands::CheckPrereqs => check_prereqs_command().await,
        }
    };

    // Run command with signal handling
    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Application interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
