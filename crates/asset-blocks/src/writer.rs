//! Marker-bounded block replacement.
//!
//! Splices a replacement block over the span located by [`find_span`]. The
//! end marker and everything after it are kept; the start marker is part of
//! the replaced span, so replacements normally begin with it again.

use std::ops::Range;

use crate::error::Result;
use crate::marker::{Markers, find_span};

/// Appended after the trimmed replacement: a blank line, then the four-space
/// indentation the end marker sits at in the documents this edits.
pub const DEFAULT_SEPARATOR: &str = "\n\n    ";

/// Replaces the block bounded by `markers` with `replacement`.
///
/// The replacement has its trailing whitespace trimmed and
/// [`DEFAULT_SEPARATOR`] appended.
///
/// Not idempotent in general: if `replacement` itself contains both markers,
/// a second application matches again and can produce a different document.
///
/// # Errors
/// Returns `Error::MarkerNotFound` or `Error::MarkersOutOfOrder` when the
/// block cannot be located. The input document is never modified.
///
/// # Example
/// ```
/// use asset_blocks::{Markers, replace_block};
///
/// let markers = Markers::new("<!--S-->", "<!--E-->").unwrap();
/// let doc = "head <!--S--> old content <!--E--> tail";
/// let updated = replace_block(doc, &markers, "<!--S--> new content").unwrap();
/// assert_eq!(updated, "head <!--S--> new content\n\n    <!--E--> tail");
/// ```
pub fn replace_block(document: &str, markers: &Markers, replacement: &str) -> Result<String> {
    replace_block_with_separator(document, markers, replacement, DEFAULT_SEPARATOR)
}

/// Like [`replace_block`], with a caller-chosen separator.
pub fn replace_block_with_separator(
    document: &str,
    markers: &Markers,
    replacement: &str,
    separator: &str,
) -> Result<String> {
    let span = find_span(document, markers)?;
    tracing::debug!(start = span.start, end = span.end, "Located block");
    Ok(splice_at(document, span, replacement, separator))
}

/// Replace `span` of `document` with the trimmed replacement and separator.
///
/// `span` must come from [`find_span`]: the old chunk then starts with the
/// whole start marker, so its first occurrence in the document is `span`.
pub(crate) fn splice_at(
    document: &str,
    span: Range<usize>,
    replacement: &str,
    separator: &str,
) -> String {
    let replacement = replacement.trim_end();
    let mut updated = String::with_capacity(
        document.len() - span.len() + replacement.len() + separator.len(),
    );
    updated.push_str(&document[..span.start]);
    updated.push_str(replacement);
    updated.push_str(separator);
    updated.push_str(&document[span.end..]);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn markers() -> Markers {
        Markers::new("<!--S-->", "<!--E-->").unwrap()
    }

    #[test]
    fn test_splice_at_located_span() {
        let doc = "x<!--S-->old<!--E-->y";
        let span = find_span(doc, &markers()).unwrap();

        assert_eq!(span, 1..12);
        assert_eq!(splice_at(doc, span, "<!--S-->new \n", "|"), "x<!--S-->new|<!--E-->y");
    }

    #[test]
    fn test_replaces_span_and_keeps_end_marker() {
        let doc = "head <!--S--> old content <!--E--> tail";
        let result = replace_block(doc, &markers(), "<!--S--> new content").unwrap();
        assert_eq!(result, "head <!--S--> new content\n\n    <!--E--> tail");
    }

    #[test]
    fn test_missing_markers_is_an_error() {
        let result = replace_block("no markers here", &markers(), "x");
        assert!(matches!(result, Err(Error::MarkerNotFound { .. })));
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let doc = "<!--S-->a<!--E-->";
        let result = replace_block(doc, &markers(), "<!--S-->b \n\t\n").unwrap();
        assert_eq!(result, "<!--S-->b\n\n    <!--E-->");
    }

    #[test]
    fn test_leading_whitespace_kept() {
        let doc = "<!--S-->a<!--E-->";
        let result = replace_block(doc, &markers(), "\n  <!--S-->b").unwrap();
        assert_eq!(result, "\n  <!--S-->b\n\n    <!--E-->");
    }

    #[test]
    fn test_custom_separator() {
        let doc = "<!--S-->a<!--E-->";
        let result = replace_block_with_separator(doc, &markers(), "<!--S-->b", "\n").unwrap();
        assert_eq!(result, "<!--S-->b\n<!--E-->");
    }

    #[test]
    fn test_only_first_block_replaced() {
        let doc = "<!--S-->one<!--E--> <!--S-->two<!--E-->";
        let result = replace_block(doc, &markers(), "<!--S-->new").unwrap();
        assert_eq!(result, "<!--S-->new\n\n    <!--E--> <!--S-->two<!--E-->");
    }
}
