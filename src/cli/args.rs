// file: src/cli/args.rs
// version: 1.0.0
// guid: 0c7f3e58-a1d6-4b92-87e0-54fa1d208b6c

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ovpn-bulker")]
#[command(about = "Bulk-manage OpenVPN profiles through NetworkManager's nmcli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import all .ovpn files in a directory and tag them with credentials
    Install {
        /// Directory containing .ovpn profile files
        directory: String,

        #[arg(short, long, help = "VPN username applied to every profile")]
        username: String,

        #[arg(
            short,
            long,
            env = "OVPN_PASSWORD",
            hide_env_values = true,
            help = "VPN password applied to every profile"
        )]
        password: String,

        #[arg(long, help = "Do not enable autoconnect on imported profiles")]
        no_autoconnect: bool,

        #[arg(long, help = "Show what would be imported without invoking nmcli")]
        dry_run: bool,
    },

    /// Show all imported VPN connections
    List {
        #[arg(short, long)]
        json: bool,
    },

    /// Connect to a specific VPN
    Connect {
        /// Connection name
        name: String,
    },

    /// Disconnect a VPN
    Disconnect {
        /// Connection name
        name: String,
    },

    /// Delete a single VPN connection
    Delete {
        /// Connection name
        name: String,
    },

    /// Remove all imported VPN connections
    DeleteAll {
        #[arg(short = 'y', long, help = "Skip the confirmation prompt")]
        yes: bool,

        #[arg(long, help = "List what would be deleted without deleting")]
        dry_run: bool,
    },

    /// Enable or disable autoconnect for a VPN connection
    Autoconnect {
        /// Connection name
        name: String,

        #[arg(value_enum)]
        state: AutoconnectState,
    },

    /// Check that nmcli and the OpenVPN plugin are available
    CheckPrereqs,
}

/// Autoconnect toggle argument for CLI
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum AutoconnectState {
    On,
    Off,
}

impl AutoconnectState {
    pub fn enabled(&self) -> bool {
        matches!(self, AutoconnectState::On)
    }
}
