//! CLI interface for h3cauth
//!
//! This crate provides the command-line interface for h3cauth: argument
//! parsing and the blocking loop that feeds captured frames to the
//! supplicant.

pub mod args;
pub mod runner;

pub use args::{Cli, SupplicantConfig};
pub use runner::{run, run_with_credentials, Outcome};
