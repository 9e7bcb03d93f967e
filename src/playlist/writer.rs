//! Playlist file output
//!
//! Writes per-entry playlists and the combined catalog playlist through
//! `persist::atomic_write`. File names come from `slug::playlist_file_name`;
//! two entries with the same slug write the same path, last one wins.

use std::path::{Path, PathBuf};

use crate::error::{AssemblerError, Result};
use crate::model::ContentEntry;
use crate::persist::{atomic_write, ensure_directory};
use crate::playlist::render::{render_document, render_entry, HEADER};
use crate::slug::playlist_file_name;

/// Outcome of writing a batch of per-entry playlists.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files replaced, in input order.
    pub written: Vec<PathBuf>,
    /// Entries without a playable record.
    pub skipped: usize,
    /// Files that could not be written. The other files were still attempted.
    pub failures: Vec<AssemblerError>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write one `<slug>.m3u` per entry into `dir`, creating it if needed.
///
/// Entries without a playable record produce no file. Returns `Err` only if
/// `dir` itself cannot be created; per-file faults land in the report.
pub fn write_per_entry_playlists<'a, I>(dir: &Path, entries: I) -> Result<BatchReport>
where
    I: IntoIterator<Item = &'a ContentEntry>,
{
    ensure_directory(dir)?;

    let mut report = BatchReport::default();

    for entry in entries {
        let body = render_entry(entry);
        if body.is_empty() {
            tracing::debug!("skipping {:?}: no playable records", entry.display_name());
            report.skipped += 1;
            continue;
        }

        let path = dir.join(playlist_file_name(entry.display_name()));
        let mut lines = Vec::with_capacity(body.len() + 1);
        lines.push(HEADER.to_string());
        lines.extend(body);

        match atomic_write(&path, &lines.join("\n")) {
            Ok(()) => {
                tracing::debug!(
                    "wrote {} ({} records)",
                    path.display(),
                    (lines.len() - 1) / 2
                );
                report.written.push(path);
            }
            Err(e) => {
                tracing::error!("failed to write {}: {}", path.display(), e);
                report.failures.push(e);
            }
        }
    }

    Ok(report)
}

/// Write `<dir>/<base_name>.m3u` covering every entry, in input order.
///
/// The file is always written, header-only when nothing is playable.
pub fn write_combined_playlist(
    dir: &Path,
    entries: &[ContentEntry],
    base_name: &str,
) -> Result<PathBuf> {
    if base_name.is_empty() || base_name.contains(['/', '\\']) {
        return Err(AssemblerError::Config(format!(
            "invalid playlist base name: {:?}",
            base_name
        )));
    }

    ensure_directory(dir)?;

    let path = dir.join(format!("{}.m3u", base_name));
    let lines = render_document(entries);
    atomic_write(&path, &lines.join("\n"))?;

    tracing::info!(
        "wrote combined playlist {} ({} records)",
        path.display(),
        (lines.len() - 1) / 2
    );
    Ok(path)
}
