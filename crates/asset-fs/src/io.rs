//! Whole-file I/O with atomic writes

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::checksum::{compute_bytes_checksum, compute_file_checksum};
use crate::{Error, NormalizedPath, Result};

/// Outcome of a verified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub source: NormalizedPath,
    pub destination: NormalizedPath,
    /// Size of the destination file after the copy.
    pub bytes: u64,
    /// `sha256:<hex>` checksum shared by source and destination.
    pub checksum: String,
}

/// Write content atomically to a file.
///
/// Writes to a temp file in the same directory, holding an advisory lock on
/// it, then renames over the target. The target is either untouched or fully
/// replaced. Parent directories are created as needed.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let written = temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })
        .and_then(|()| {
            temp_file
                .write_all(content)
                .and_then(|()| temp_file.sync_all())
                .map_err(|e| Error::io(&temp_path, e))
        });

    let _ = temp_file.unlock();
    drop(temp_file);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, &native_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&native_path, e));
    }

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read raw bytes from a file.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Write raw bytes to a file atomically.
pub fn write_bytes(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    write_atomic(path, content)
}

/// Copy `source` to `destination` and verify the result.
///
/// The destination is checked against the source by size and checksum after
/// the write.
pub fn copy_file(source: &NormalizedPath, destination: &NormalizedPath) -> Result<CopyReport> {
    if !source.is_file() {
        return Err(Error::SourceMissing {
            path: source.to_native(),
        });
    }

    let data = read_bytes(source)?;
    tracing::debug!(source = %source, bytes = data.len(), "Read copy source");
    write_atomic(destination, &data)?;

    let native_dest = destination.to_native();
    let bytes = fs::metadata(&native_dest)
        .map_err(|e| Error::io(&native_dest, e))?
        .len();
    if bytes != data.len() as u64 {
        return Err(Error::VerificationFailed {
            path: native_dest,
            message: format!("expected {} bytes, found {}", data.len(), bytes),
        });
    }

    let expected = compute_bytes_checksum(&data);
    let actual = compute_file_checksum(&native_dest).map_err(|e| Error::io(&native_dest, e))?;
    if expected != actual {
        return Err(Error::VerificationFailed {
            path: native_dest,
            message: format!("checksum mismatch: {} != {}", actual, expected),
        });
    }

    tracing::info!(source = %source, destination = %destination, bytes, "Copied file");
    Ok(CopyReport {
        source: source.clone(),
        destination: destination.clone(),
        bytes,
        checksum: expected,
    })
}
