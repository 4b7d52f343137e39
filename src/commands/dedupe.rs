//! `mockscribe dedupe` command.

use std::io::Write;
use std::path::Path;

use super::write_failed;
use crate::matcher::mark_duplicates;
use crate::ports::FileSystem;
use crate::store::FixtureStore;

/// Execute the `dedupe` command.
///
/// Prints the collection with `isDuplicate` recomputed, and a summary line
/// on stderr.
///
/// # Errors
///
/// Returns an error string if the mock file cannot be loaded.
pub fn run(fs: &dyn FileSystem, out: &mut dyn Write, mocks: &Path) -> Result<(), String> {
    let mocks = FixtureStore::new(fs).load_mocks(mocks).map_err(|e| e.to_string())?;
    let total = mocks.len();

    let marked = mark_duplicates(mocks);
    let flagged = marked.iter().filter(|m| m.is_duplicate == Some(true)).count();

    let json = serde_json::to_string_pretty(&marked)
        .map_err(|e| format!("Failed to serialize mocks: {e}"))?;
    writeln!(out, "{json}").map_err(write_failed)?;
    eprintln!("{flagged} of {total} mock(s) flagged as duplicates.");
    Ok(())
}
