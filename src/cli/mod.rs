// file: src/cli/mod.rs
// version: 1.0.0
// guid: d35a9f80-7e14-4c6b-b2d9-06fe81c47a25

//! Command line interface for ovpn-bulker

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
