//! Catalog hand-off
//!
//! The scraping stage hands over a fully resolved JSON array of entries.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{AssemblerError, Result};
use crate::model::ContentEntry;

/// Load a catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ContentEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AssemblerError::io(path, e))?;
    parse_catalog(BufReader::new(file), path)
}

/// Parse a catalog from any reader. `origin` only labels errors.
pub fn parse_catalog<R: Read>(reader: R, origin: &Path) -> Result<Vec<ContentEntry>> {
    let entries: Vec<ContentEntry> =
        serde_json::from_reader(reader).map_err(|source| AssemblerError::Catalog {
            path: origin.to_path_buf(),
            source,
        })?;

    let records: usize = entries.iter().map(|e| e.episodes.len()).sum();
    tracing::debug!(
        "catalog {}: {} entries, {} records",
        origin.display(),
        entries.len(),
        records
    );
    Ok(entries)
}
