// src/file.rs
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::error::Result;
use crate::params::DEFAULT_OUT_FILENAME;

/// Write the JSON document to `out`, or to stdout when `out` is `None`.
/// Returns the file written, if any.
pub fn write_output(out: Option<&Path>, json: &str) -> Result<Option<PathBuf>> {
    let Some(out) = out else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        return Ok(None);
    };

    let path = resolve_out_path(out)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, json)?;
    Ok(Some(path))
}

/// A directory (or a path ending in a separator) gets the default file name.
pub fn resolve_out_path(p: &Path) -> Result<PathBuf> {
    if looks_like_dir_hint(p) || p.is_dir() {
        ensure_directory(p)?;
        Ok(p.join(DEFAULT_OUT_FILENAME))
    } else {
        Ok(p.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
