//! `mockscribe unused` command.

use std::io::Write;
use std::path::Path;

use super::write_failed;
use crate::matcher::partition_served;
use crate::ports::FileSystem;
use crate::store::FixtureStore;

/// Execute the `unused` command: lists mocks the last run never served.
///
/// # Errors
///
/// Returns an error string if the mock file cannot be loaded.
pub fn run(fs: &dyn FileSystem, out: &mut dyn Write, mocks: &Path) -> Result<(), String> {
    let mocks = FixtureStore::new(fs).load_mocks(mocks).map_err(|e| e.to_string())?;
    let (served, unserved) = partition_served(&mocks);

    if unserved.is_empty() {
        writeln!(out, "All {} mock(s) were served.", served.len()).map_err(write_failed)?;
        return Ok(());
    }

    let id_width = unserved.iter().map(|m| m.id.len()).max().unwrap_or(2).max(2);
    let method_width = unserved.iter().map(|m| m.method.len()).max().unwrap_or(6).max(6);
    for mock in &unserved {
        writeln!(out, "{:<id_width$}  {:<method_width$}  {}", mock.id, mock.method, mock.url)
            .map_err(write_failed)?;
    }
    writeln!(out, "\n{} of {} mock(s) never served.", unserved.len(), mocks.len())
        .map_err(write_failed)
}
