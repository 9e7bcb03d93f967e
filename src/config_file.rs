//! Configuration file support
//!
//! Loads assembler configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{AssemblerConfig, LoggingConfig};
use crate::error::{AssemblerError, Result};
use crate::persist::atomic_write;

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Output settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Base directory for category output
    pub root: PathBuf,
    /// Combined playlist base name
    pub combined_name: String,
    /// Combined playlist directory
    pub combined_dir: Option<PathBuf>,
    /// Write the combined playlist even when nothing is playable
    pub write_empty_catalog: Option<bool>,
    /// Category routing
    #[serde(default)]
    pub categories: Vec<CategorySettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySettings {
    /// Category label as set by the scraper
    pub name: String,
    /// Output directory, relative to `output.root` unless absolute
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AssemblerError::io(path, e))?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        atomic_write(path.as_ref(), &content)
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            output: OutputSettings {
                root: PathBuf::from("."),
                combined_name: "catalog".to_string(),
                combined_dir: None,
                write_empty_catalog: Some(false),
                categories: vec![
                    CategorySettings {
                        name: "dizi".to_string(),
                        dir: PathBuf::from("diziler"),
                    },
                    CategorySettings {
                        name: "program".to_string(),
                        dir: PathBuf::from("programlar"),
                    },
                ],
            },
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
        }
    }

    /// Convert to AssemblerConfig
    pub fn into_assembler_config(self) -> AssemblerConfig {
        let defaults = LoggingConfig::default();
        AssemblerConfig {
            output_root: self.output.root,
            combined_dir: self.output.combined_dir,
            combined_name: self.output.combined_name,
            category_dirs: self
                .output
                .categories
                .into_iter()
                .map(|c| (c.name, c.dir))
                .collect(),
            write_empty_catalog: self.output.write_empty_catalog.unwrap_or(false),
            logging: match self.logging {
                Some(l) => LoggingConfig {
                    level: l.level,
                    format: l.format.unwrap_or(defaults.format),
                },
                None => defaults,
            },
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
