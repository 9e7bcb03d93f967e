//! Crash-safe file replacement
//!
//! Content is written to a temporary sibling and renamed over the target,
//! so a reader sees either the previous file or the complete new one.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{AssemblerError, Result};

/// Create `dir` and its parents if missing.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(AssemblerError::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|e| AssemblerError::io(dir, e))
}

/// Atomically replace `path` with `content`.
///
/// `content` is written as UTF-8 bytes without any line-ending translation;
/// a trailing `\n` is appended when missing. If anything fails before the
/// rename, the temporary file is removed and `path` is left untouched.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| AssemblerError::Config(format!("not a file path: {}", path.display())))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{}.", file_name.to_string_lossy()))
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| AssemblerError::io(dir, e))?;

    let tmp_path = tmp.path().to_path_buf();
    let io_err = |e: std::io::Error| AssemblerError::io(&tmp_path, e);

    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    if !content.ends_with('\n') {
        tmp.write_all(b"\n").map_err(io_err)?;
    }
    tmp.flush().map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    tmp.persist(path)
        .map_err(|e| AssemblerError::io(path, e.error))?;

    tracing::trace!("replaced {}", path.display());
    Ok(())
}
