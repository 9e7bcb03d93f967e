//! Assembly run
//!
//! Routes entries to their category directories, writes the per-entry
//! playlists and then the combined playlist. Each output target is attempted
//! independently: a failed category does not stop the next one or the
//! combined file.

use std::path::PathBuf;

use crate::config::AssemblerConfig;
use crate::error::AssemblerError;
use crate::model::ContentEntry;
use crate::playlist::{write_combined_playlist, write_per_entry_playlists};

/// An output target that could not be written.
#[derive(Debug)]
pub struct TargetFailure {
    /// Category label, or `None` for the combined playlist.
    pub category: Option<String>,
    pub error: AssemblerError,
}

/// Outcome of one assembly run.
#[derive(Debug, Default)]
pub struct AssemblyReport {
    pub written: Vec<PathBuf>,
    pub skipped_entries: usize,
    pub failures: Vec<TargetFailure>,
}

impl AssemblyReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Err(Incomplete)` when any target failed.
    pub fn into_result(self) -> crate::error::Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(AssemblerError::Incomplete {
                failed: self.failures.len(),
            })
        }
    }
}

/// Group entries by category, keeping first-appearance order.
pub fn partition_by_category(entries: &[ContentEntry]) -> Vec<(&str, Vec<&ContentEntry>)> {
    let mut groups: Vec<(&str, Vec<&ContentEntry>)> = Vec::new();
    for entry in entries {
        let category = entry.category.as_str();
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, members)) => members.push(entry),
            None => groups.push((category, vec![entry])),
        }
    }
    groups
}

/// Write every output target for `entries`.
pub fn assemble(config: &AssemblerConfig, entries: &[ContentEntry]) -> AssemblyReport {
    let mut report = AssemblyReport::default();

    if !entries.iter().any(ContentEntry::has_playable) && !config.write_empty_catalog {
        tracing::error!(
            "no playable records in {} entries, not writing any playlist",
            entries.len()
        );
        report.skipped_entries = entries.len();
        return report;
    }

    for (category, members) in partition_by_category(entries) {
        let dir = config.category_dir(category);
        tracing::info!(
            "category {:?}: {} entries -> {}",
            category,
            members.len(),
            dir.display()
        );

        match write_per_entry_playlists(&dir, members) {
            Ok(batch) => {
                report.written.extend(batch.written);
                report.skipped_entries += batch.skipped;
                report
                    .failures
                    .extend(batch.failures.into_iter().map(|error| TargetFailure {
                        category: Some(category.to_string()),
                        error,
                    }));
            }
            Err(error) => {
                tracing::error!("category {:?} failed: {}", category, error);
                report.failures.push(TargetFailure {
                    category: Some(category.to_string()),
                    error,
                });
            }
        }
    }

    match write_combined_playlist(&config.combined_dir(), entries, &config.combined_name) {
        Ok(path) => report.written.push(path),
        Err(error) => {
            tracing::error!("combined playlist failed: {}", error);
            report.failures.push(TargetFailure {
                category: None,
                error,
            });
        }
    }

    tracing::info!(
        "assembly finished: {} files written, {} entries skipped, {} failures",
        report.written.len(),
        report.skipped_entries,
        report.failures.len()
    );
    report
}
