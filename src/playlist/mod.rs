//! Playlist generation module
//!
//! This module handles M3U playlist output:
//! - Rendering a catalog entry into `#EXTINF` / URL line pairs
//! - One playlist file per entry, named after the entry's slug
//! - One combined playlist over the whole catalog

pub mod render;
pub mod writer;

pub use render::{render_document, render_entry, HEADER};
pub use writer::{write_combined_playlist, write_per_entry_playlists, BatchReport};
