//! `mockscribe segment` command.

use std::io::Write;
use std::path::Path;

use super::{load_tests, write_failed};
use crate::ports::FileSystem;
use crate::segment::segment;
use crate::store::FixtureStore;

/// Execute the `segment` command: prints the buckets as pretty JSON.
///
/// # Errors
///
/// Returns an error string if a fixture cannot be loaded.
pub fn run(
    fs: &dyn FileSystem,
    out: &mut dyn Write,
    events: &Path,
    tests: Option<&Path>,
) -> Result<(), String> {
    let store = FixtureStore::new(fs);
    let events = store.load_events(events).map_err(|e| e.to_string())?;
    let tests = load_tests(&store, tests)?;

    let buckets = segment(&events, &tests);
    let json = serde_json::to_string_pretty(&buckets)
        .map_err(|e| format!("Failed to serialize buckets: {e}"))?;
    writeln!(out, "{json}").map_err(write_failed)
}
