// file: src/logging/mod.rs
// version: 1.0.0
// guid: c4d91e07-6a52-48fb-b3c0-1f58d27a964e

//! Logging system for ovpn-bulker

pub mod logger;

pub use logger::init_logger;
