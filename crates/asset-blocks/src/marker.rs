//! Block markers and span location.
//!
//! A block is delimited by two literal markers, for example:
//! ```text
//! <!-- UNIFIED COMMAND CENTER (Moved to root for z-index) -->
//! <a href="#">...</a>
//! <!-- Loading Screen -->
//! ```
//! The span runs from the first occurrence of the start marker up to, but
//! not including, the first occurrence of the end marker.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A pair of literal start/end markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    start: String,
    end: String,
}

impl Markers {
    /// Create a marker pair.
    ///
    /// # Errors
    /// Returns `Error::EmptyMarker` if either marker is empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let markers = Self {
            start: start.into(),
            end: end.into(),
        };
        markers.validate()?;
        Ok(markers)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Deserialized markers bypass `new`, so callers re-check here.
    pub fn validate(&self) -> Result<()> {
        if self.start.is_empty() || self.end.is_empty() {
            return Err(Error::EmptyMarker);
        }
        Ok(())
    }
}

/// Locates the span bounded by `markers`.
///
/// Each marker is searched independently from the start of the document.
/// The returned range covers the start marker and everything up to the end
/// marker, excluding the end marker itself.
///
/// # Errors
/// - `Error::MarkerNotFound` if either marker is absent (start is checked first)
/// - `Error::MarkersOutOfOrder` if the end marker does not come after the start marker
/// - `Error::EmptyMarker` for empty markers
///
/// # Example
/// ```
/// use asset_blocks::{Markers, find_span};
///
/// let markers = Markers::new("<!--S-->", "<!--E-->").unwrap();
/// let span = find_span("head <!--S--> old <!--E--> tail", &markers).unwrap();
/// assert_eq!(span, 5..18);
/// ```
pub fn find_span(document: &str, markers: &Markers) -> Result<Range<usize>> {
    markers.validate()?;

    let start = document
        .find(markers.start())
        .ok_or_else(|| Error::MarkerNotFound {
            marker: markers.start().to_string(),
        })?;
    let end = document
        .find(markers.end())
        .ok_or_else(|| Error::MarkerNotFound {
            marker: markers.end().to_string(),
        })?;

    // An end match inside the start marker does not close the block.
    if end < start + markers.start().len() {
        return Err(Error::MarkersOutOfOrder {
            start: markers.start().to_string(),
            end: markers.end().to_string(),
        });
    }

    Ok(start..end)
}

/// Checks whether both markers are present in a usable order.
pub fn has_markers(document: &str, markers: &Markers) -> bool {
    find_span(document, markers).is_ok()
}
