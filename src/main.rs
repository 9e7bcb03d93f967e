//! Playlist Assembler
//!
//! Reads a resolved catalog (JSON) produced by a scraper and writes the
//! per-entry and combined M3U playlists described by the configuration.

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playlist_assembler::catalog::{load_catalog, parse_catalog};
use playlist_assembler::config::{AssemblerConfig, LoggingConfig};
use playlist_assembler::config_file::{generate_default_config, ConfigFile};
use playlist_assembler::{assemble, AssemblerError, ContentEntry, Result};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "playlist-assembler";

/// Default configuration file, optional.
const DEFAULT_CONFIG: &str = "assembler.toml";

#[derive(Parser, Debug, Clone)]
#[command(name = "playlist-assembler")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog JSON produced by the scraper, `-` for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Override the output root directory
    #[arg(short, long)]
    output_root: Option<PathBuf>,

    /// Override the combined playlist name (without extension)
    #[arg(short = 'n', long)]
    combined_name: Option<String>,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write a default configuration file to this path and exit
    #[arg(long, value_name = "PATH")]
    init_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.init_config {
        generate_default_config(path)?;
        println!("wrote default configuration to {}", path.display());
        return Ok(());
    }

    let (mut config, config_note) = load_config(args.config.as_deref())?;
    if let Some(root) = args.output_root {
        config.output_root = root;
    }
    if let Some(name) = args.combined_name {
        config.combined_name = name;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    init_logging(&config.logging);
    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(note) = config_note {
        tracing::warn!("{}", note);
    }

    config.validate().map_err(AssemblerError::Config)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let entries = read_entries(&args.input)?;
    tracing::info!("{} catalog entries read from {}", entries.len(), args.input);

    let report = assemble(&config, &entries);
    for failure in &report.failures {
        match &failure.category {
            Some(category) => tracing::error!("category {:?}: {}", category, failure.error),
            None => tracing::error!("combined playlist: {}", failure.error),
        }
    }
    report.into_result()?;

    Ok(())
}

/// Load the configuration file, falling back to defaults when the implicit
/// default file is missing. An explicitly named file must load.
fn load_config(path: Option<&Path>) -> Result<(AssemblerConfig, Option<String>)> {
    match path {
        Some(path) => Ok((ConfigFile::from_file(path)?.into_assembler_config(), None)),
        None if Path::new(DEFAULT_CONFIG).exists() => Ok((
            ConfigFile::from_file(DEFAULT_CONFIG)?.into_assembler_config(),
            None,
        )),
        None => Ok((
            AssemblerConfig::default(),
            Some(format!("{} not found, using defaults", DEFAULT_CONFIG)),
        )),
    }
}

fn read_entries(input: &str) -> Result<Vec<ContentEntry>> {
    if input == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| AssemblerError::io("<stdin>", e))?;
        parse_catalog(buf.as_slice(), Path::new("<stdin>"))
    } else {
        load_catalog(input)
    }
}

/// Initialize logging with tracing
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("playlist_assembler={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
