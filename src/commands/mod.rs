//! Command dispatch and handlers.
//!
//! Handlers read fixtures through the [`FileSystem`] port and write their
//! report to `out`, so tests can run them against an in-memory filesystem.

pub mod backends;
pub mod dedupe;
pub mod generate;
pub mod segment;
pub mod unused;

use std::io::{self, Write};
use std::path::Path;

use crate::adapters::LiveFileSystem;
use crate::cli::Command;
use crate::config::EmitContext;
use crate::model::TestCase;
use crate::ports::FileSystem;
use crate::store::FixtureStore;

/// Dispatch a parsed command against the real disk and stdout.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let stdout = io::stdout();
    dispatch_with(command, &LiveFileSystem, &mut stdout.lock())
}

/// Dispatch a command with the given filesystem and output sink.
///
/// # Errors
///
/// Returns an error string if config loading or the command handler fails.
pub fn dispatch_with(
    command: &Command,
    fs: &dyn FileSystem,
    out: &mut dyn Write,
) -> Result<(), String> {
    match command {
        Command::Segment { events, tests } => segment::run(fs, out, events, tests.as_deref()),
        Command::Generate { events, tests, backend, out: out_dir, config } => {
            let ctx = EmitContext::load(fs, config.as_deref()).map_err(|e| e.to_string())?;
            generate::run(fs, out, events, tests.as_deref(), backend, out_dir.as_deref(), &ctx)
        }
        Command::Dedupe { mocks } => dedupe::run(fs, out, mocks),
        Command::Unused { mocks } => unused::run(fs, out, mocks),
        Command::Backends => backends::run(out),
    }
}

/// Loads the optional tests file; no file means no tests.
fn load_tests(store: &FixtureStore<'_>, path: Option<&Path>) -> Result<Vec<TestCase>, String> {
    path.map_or_else(|| Ok(Vec::new()), |path| store.load_tests(path).map_err(|e| e.to_string()))
}

fn write_failed(err: io::Error) -> String {
    format!("Failed to write output: {err}")
}
