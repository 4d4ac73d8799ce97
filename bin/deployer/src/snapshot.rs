//! JSON snapshots of a ledger on disk.

use eyre::WrapErr;
use ledger::Ledger;
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;
use tracing::debug;

/// Load a snapshot and check that it is internally consistent.
pub fn load(path: impl AsRef<Path>) -> eyre::Result<Ledger> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read snapshot {}", path.display()))?;
    let ledger: Ledger = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Failed to parse snapshot {}", path.display()))?;
    ledger.audit()?;

    debug!(path = %path.display(), events = ledger.events().len(), "Loaded snapshot");
    Ok(ledger)
}

/// Write a snapshot, replacing any previous file only once the new one is
/// fully written.
pub fn save(ledger: &Ledger, path: impl AsRef<Path>) -> eyre::Result<()> {
    let path = path.as_ref();
    let contents = serde_json::to_string_pretty(ledger)?;

    // Same directory as the target so the final rename stays on one filesystem.
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .wrap_err_with(|| format!("Failed to create snapshot file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .wrap_err_with(|| format!("Failed to write snapshot {}", path.display()))?;
    tmp.persist(path)
        .wrap_err_with(|| format!("Failed to replace snapshot {}", path.display()))?;

    debug!(path = %path.display(), "Saved snapshot");
    Ok(())
}
