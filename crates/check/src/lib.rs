//! `estate-check` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod audit;
pub mod config;
pub mod error;
pub mod runner;
