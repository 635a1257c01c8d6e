//! Error types for asset-blocks

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Marker not found: {marker:?}")]
    MarkerNotFound { marker: String },

    #[error("End marker {end:?} does not follow start marker {start:?}")]
    MarkersOutOfOrder { start: String, end: String },

    #[error("Block markers must not be empty")]
    EmptyMarker,

    #[error("Cannot read {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: asset_fs::Error,
    },

    #[error("Cannot write {path}: {source}")]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: asset_fs::Error,
    },
}

impl Error {
    /// True for the recoverable "markers not usable" outcomes.
    ///
    /// Both a missing marker and markers in the wrong order leave the
    /// document untouched.
    pub fn is_marker_not_found(&self) -> bool {
        matches!(self, Self::MarkerNotFound { .. } | Self::MarkersOutOfOrder { .. })
    }
}
