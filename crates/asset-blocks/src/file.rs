//! File-level block replacement.
//!
//! Reads a document, replaces the marked block in memory and writes the
//! result back as a whole file. No lock is held between the read and the
//! write; a concurrent writer's changes are overwritten.

use std::ops::Range;

use asset_fs::{NormalizedPath, io};

use crate::diff::{DiffSummary, render_diff, summarize};
use crate::error::{Error, Result};
use crate::marker::{Markers, find_span};
use crate::writer::{DEFAULT_SEPARATOR, splice_at};

/// Options for [`splice_file`].
#[derive(Debug, Clone)]
pub struct SpliceOptions {
    /// Where to write the result. Defaults to the source path.
    pub destination: Option<NormalizedPath>,
    pub separator: String,
    /// Compute the result without writing it.
    pub dry_run: bool,
}

impl Default for SpliceOptions {
    fn default() -> Self {
        Self {
            destination: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            dry_run: false,
        }
    }
}

/// What a splice did (or would do, for a dry run).
#[derive(Debug, Clone)]
pub struct SpliceReport {
    pub source: NormalizedPath,
    pub destination: NormalizedPath,
    /// Byte range of the replaced chunk in the original document.
    pub span: Range<usize>,
    pub original: String,
    pub updated: String,
    pub written: bool,
}

impl SpliceReport {
    /// Bytes added (positive) or removed (negative) by the splice.
    pub fn size_delta(&self) -> i64 {
        self.updated.len() as i64 - self.original.len() as i64
    }

    pub fn summary(&self) -> DiffSummary {
        summarize(&self.original, &self.updated)
    }

    /// Unified diff between the original and updated document.
    pub fn diff(&self) -> String {
        render_diff(
            &self.original,
            &self.updated,
            self.source.as_str(),
            self.destination.as_str(),
        )
    }
}

/// Replace the marked block in the file at `source`.
///
/// # Errors
/// - `Error::SourceUnreadable` if the source cannot be read
/// - `Error::MarkerNotFound` / `Error::MarkersOutOfOrder` if the block cannot
///   be located; nothing is written
/// - `Error::DestinationUnwritable` if the result cannot be written; the
///   destination keeps its previous contents
pub fn splice_file(
    source: &NormalizedPath,
    markers: &Markers,
    replacement: &str,
    options: &SpliceOptions,
) -> Result<SpliceReport> {
    let destination = options
        .destination
        .clone()
        .unwrap_or_else(|| source.clone());

    let original = io::read_text(source).map_err(|e| Error::SourceUnreadable {
        path: source.to_native(),
        source: e,
    })?;
    tracing::debug!(path = %source, bytes = original.len(), "Read document");

    let span = find_span(&original, markers).inspect_err(|e| {
        tracing::warn!(path = %source, error = %e, "Block markers not usable; leaving document unchanged");
    })?;
    let updated = splice_at(&original, span.clone(), replacement, &options.separator);

    let written = if options.dry_run {
        tracing::info!(path = %destination, "Dry run; not writing");
        false
    } else {
        io::write_text(&destination, &updated).map_err(|e| Error::DestinationUnwritable {
            path: destination.to_native(),
            source: e,
        })?;
        tracing::info!(path = %destination, bytes = updated.len(), "Wrote document");
        true
    };

    Ok(SpliceReport {
        source: source.clone(),
        destination,
        span,
        original,
        updated,
        written,
    })
}
