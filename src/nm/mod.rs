// file: src/nm/mod.rs
// version: 1.0.0
// guid: e1b64f2a-8c07-4953-ad28-397f50c614bd

//! NetworkManager integration via the `nmcli` command-line tool

pub mod client;
pub mod profile;

pub use client::NmClient;
pub use profile::VpnProfile;
