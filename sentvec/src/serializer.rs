//! JSON output for records
//!
//! Writes go to a temporary file next to the target and are persisted over
//! it in one rename, so readers see either the old file or the complete new one.

use crate::error::{Result, SentvecError};
use crate::record::Record;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `records` as a pretty-printed JSON array, replacing `path`
///
/// A new file gets the same mode as a plain `fs::write` (0o666 minus umask);
/// an existing file keeps its permissions.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if path.file_name().is_none() {
        return Err(SentvecError::invalid_path(format!(
            "Output path has no file name: {}",
            path.display()
        )));
    }

    fs::create_dir_all(parent).map_err(|e| SentvecError::write(parent, e))?;

    let mut builder = tempfile::Builder::new();
    builder.prefix(".sentvec-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder
        .tempfile_in(parent)
        .map_err(|e| SentvecError::write(path, e))?;

    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| SentvecError::write(path, e))?;
        }
    }

    write_pretty(tmp.as_file(), path, records)?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| SentvecError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| SentvecError::write(path, e.error))?;

    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Serialize in memory first so I/O failures surface as write errors for `path`
fn write_pretty<W: Write>(mut writer: W, path: &Path, records: &[Record]) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(records)?;
    bytes.push(b'\n');
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| SentvecError::write(path, e))
}

/// Read records previously written by [`write_records`]
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|e| SentvecError::read(path, e))?;
    Ok(serde_json::from_str(&content)?)
}
