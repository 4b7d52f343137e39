//! `mockscribe backends` command.

use std::io::Write;

use super::write_failed;
use crate::emit::BackendRegistry;

/// Execute the `backends` command: one `id  label  suffix` row per backend.
///
/// # Errors
///
/// Returns an error string if writing to `out` fails.
pub fn run(out: &mut dyn Write) -> Result<(), String> {
    let registry = BackendRegistry::default();
    let width = registry.ids().iter().map(|id| id.len()).max().unwrap_or(2);
    for backend in registry.iter() {
        let (id, label, suffix) = (backend.id(), backend.label(), backend.file_suffix());
        writeln!(out, "{id:<width$}  {label}  (*.{suffix})").map_err(write_failed)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_backend() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        let ids: Vec<_> = printed.lines().filter_map(|l| l.split_whitespace().next()).collect();
        assert_eq!(ids, vec!["rtl", "playwright", "cypress", "testcafe", "robot"]);
        assert!(printed.contains("playwright  Playwright  (*.spec.js)"));
    }
}
