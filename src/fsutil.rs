use crate::{Error, Result};
use std::{fs, io::Write, path::Path};
use tempfile::NamedTempFile;

/// Create `path` (and its parents when `recursive`) unless it already exists.
pub fn ensure_dir(path: &Path, recursive: bool) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    let created = if recursive {
        fs::create_dir_all(path)
    } else {
        fs::create_dir(path)
    };
    created.map_err(|e| Error::fs(path, e))
}

/// Replace `path` with `lines` joined by newlines. The content goes to a
/// uniquely named temp file in the same directory, which is renamed over the
/// target; the temp file is removed if anything fails before that.
pub fn overwrite_file(path: &Path, lines: &[&str]) -> Result<()> {
    let mut content = lines.join("\n");
    if !content.ends_with('\n') {
        content.push('\n');
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::fs(dir, e))?;
    tmp.as_file_mut()
        .write_all(content.as_bytes())
        .map_err(|e| Error::fs(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::fs(path, e.error))?;
    Ok(())
}
