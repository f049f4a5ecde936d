// file: src/lib.rs
// version: 1.0.0
// guid: 7b2e5d90-41af-4c38-9e76-d80413c5a2f9

//! # ovpn-bulker
//!
//! Bulk-import and manage OpenVPN profiles through NetworkManager's `nmcli`.
//!
//! Every operation is realized by invoking `nmcli` with a fixed argument
//! template; the tool holds no state of its own between invocations. Profile
//! identity is the `.ovpn` file's base name, which is also the connection
//! name NetworkManager assigns on import.

pub mod cli;
pub mod error;
pub mod installer;
pub mod logging;
pub mod nm;
pub mod utils;

pub use error::{BulkerError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
