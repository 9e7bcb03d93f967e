//! Assembler configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::slug::slugify;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Assembler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// Base directory for category output
    pub output_root: PathBuf,

    /// Directory of the combined playlist; `output_root` when unset
    pub combined_dir: Option<PathBuf>,

    /// Combined playlist file name, without extension
    pub combined_name: String,

    /// Category label to output directory
    pub category_dirs: BTreeMap<String, PathBuf>,

    /// Write a header-only combined playlist when nothing is playable
    pub write_empty_catalog: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            combined_dir: None,
            combined_name: "catalog".to_string(),
            category_dirs: BTreeMap::new(),
            write_empty_catalog: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl AssemblerConfig {
    /// Directory that receives the per-entry playlists of `category`.
    ///
    /// Mapped directories are taken relative to `output_root` unless absolute.
    /// Unmapped categories go to `output_root/<slug>`, the empty label to
    /// `output_root` itself.
    pub fn category_dir(&self, category: &str) -> PathBuf {
        if let Some(dir) = self.category_dirs.get(category) {
            return self.resolve(dir);
        }
        if category.trim().is_empty() {
            return self.output_root.clone();
        }
        self.output_root.join(slugify(category))
    }

    /// Directory of the combined playlist.
    pub fn combined_dir(&self) -> PathBuf {
        match &self.combined_dir {
            Some(dir) => self.resolve(dir),
            None => self.output_root.clone(),
        }
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.output_root.join(dir)
        }
    }

    /// Check values the file format cannot express as constraints.
    pub fn validate(&self) -> Result<(), String> {
        let name = self.combined_name.trim();
        if name.is_empty() {
            return Err("combined_name must not be empty".to_string());
        }
        if name.contains(['/', '\\']) {
            return Err(format!("combined_name must be a file name: {}", name));
        }
        if self.category_dirs.values().any(|d| d.as_os_str().is_empty()) {
            return Err("category directories must not be empty".to_string());
        }
        Ok(())
    }
}
