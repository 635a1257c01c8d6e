//! Marker-bounded block replacement for the asset toolkit.
//!
//! Documents such as `public/mindwave.html` carry literal comment markers
//! around regions that get regenerated:
//!
//! ```text
//! <!-- UNIFIED COMMAND CENTER (Moved to root for z-index) -->
//! <a href="#">...</a>
//!
//!     <!-- Loading Screen -->
//! ```
//!
//! - [`marker`] locates the span between a start and end marker
//! - [`writer`] splices a replacement over that span in memory
//! - [`file`] wraps the two with whole-file read and write
//! - [`diff`] renders previews for dry runs
//!
//! A missing or misordered marker is a recoverable failure: the document is
//! left byte-for-byte unchanged and the caller gets `Error::MarkerNotFound`
//! or `Error::MarkersOutOfOrder`.

pub mod diff;
pub mod error;
pub mod file;
pub mod marker;
pub mod writer;

pub use diff::{DiffSummary, render_diff};
pub use error::{Error, Result};
pub use file::{SpliceOptions, SpliceReport, splice_file};
pub use marker::{Markers, find_span, has_markers};
pub use writer::{DEFAULT_SEPARATOR, replace_block, replace_block_with_separator};
