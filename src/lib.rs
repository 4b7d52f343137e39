//! Turns recorded browser sessions into mocked UI tests.
//!
//! The core is pure and synchronous:
//!
//! - [`url_norm`] canonicalizes URLs so equivalent requests compare equal;
//! - [`equality`] compares JSON bodies structurally;
//! - [`matcher`] matches and deduplicates mocks;
//! - [`segment`] splits a session into named scenario buckets;
//! - [`emit`] renders buckets for several test frameworks.
//!
//! Configuration, fixture I/O and the CLI wrap around it.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod emit;
pub mod equality;
pub mod error;
pub mod matcher;
pub mod model;
pub mod ports;
pub mod segment;
pub mod store;
pub mod url_norm;

pub use config::EmitContext;
pub use emit::{generate, render, Backend, BackendRegistry};
pub use error::{ConfigError, EmitError, StoreError, UrlError};
pub use matcher::{mark_duplicates, mocks_match, request_matches_mock, requests_match};
pub use segment::segment;
pub use url_norm::canonicalize;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
