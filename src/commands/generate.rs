//! `mockscribe generate` command.

use std::io::Write;
use std::path::Path;

use super::{load_tests, write_failed};
use crate::config::EmitContext;
use crate::emit::{generate, BackendRegistry};
use crate::ports::FileSystem;
use crate::store::FixtureStore;

/// Execute the `generate` command.
///
/// With `out_dir`, writes one file per bucket and prints the written paths.
/// Otherwise prints every file's source after a header naming it.
///
/// # Errors
///
/// Returns an error string for unknown backends, unloadable fixtures, or
/// failed writes.
pub fn run(
    fs: &dyn FileSystem,
    out: &mut dyn Write,
    events: &Path,
    tests: Option<&Path>,
    backend: &str,
    out_dir: Option<&Path>,
    ctx: &EmitContext,
) -> Result<(), String> {
    let registry = BackendRegistry::default();
    let backend = registry.get(backend).map_err(|e| e.to_string())?;

    let store = FixtureStore::new(fs);
    let events = store.load_events(events).map_err(|e| e.to_string())?;
    let tests = load_tests(&store, tests)?;

    let files = generate(&events, &tests, backend, ctx);
    if files.is_empty() {
        eprintln!("No actions recorded; nothing to generate.");
        return Ok(());
    }

    for file in &files {
        match out_dir {
            Some(dir) => {
                let path = store.save_generated(dir, file).map_err(|e| e.to_string())?;
                writeln!(out, "{}", path.display()).map_err(write_failed)?;
            }
            None => {
                writeln!(out, "==> {} <==\n{}", file.file_name, file.source).map_err(write_failed)?;
            }
        }
    }
    Ok(())
}
