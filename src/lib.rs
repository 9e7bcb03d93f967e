//! Playlist Assembler
//!
//! Turns a fully resolved catalog of scraped content entries into M3U
//! playlists: one file per entry, grouped into category directories, plus
//! one combined catalog file. Every file is replaced atomically.

pub mod assemble;
pub mod catalog;
pub mod config;
pub mod config_file;
pub mod error;
pub mod model;
pub mod persist;
pub mod playlist;
pub mod slug;


pub use assemble::{assemble, AssemblyReport, TargetFailure};
pub use config::AssemblerConfig;
pub use error::{AssemblerError, Result};
pub use model::{ContentEntry, StreamRecord};
pub use persist::atomic_write;
pub use playlist::{render_entry, write_combined_playlist, write_per_entry_playlists};
