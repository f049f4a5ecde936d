// file: src/utils/mod.rs
// version: 1.0.0
// guid: f2a84c17-5b90-4e63-8d21-c670b39e154a

//! Utility modules for system operations

pub mod system;

pub use system::SystemUtils;
