//! Base64 transcoding and `data:` URIs.

use asset_fs::{NormalizedPath, io};
use base64::{Engine as _, engine::general_purpose};

use crate::error::Result;

/// Source and destination sizes of an encode or decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeReport {
    pub source: NormalizedPath,
    pub destination: NormalizedPath,
    pub input_len: usize,
    pub output_len: usize,
}

/// Encode bytes with the standard base64 alphabet.
pub fn encode_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64.
///
/// ASCII whitespace is ignored and a leading `data:<mime>;base64,` header
/// is skipped, so both raw dumps and copied data URIs decode.
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim_start();
    let payload = match trimmed.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, data)| data),
        None => trimmed,
    };
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(general_purpose::STANDARD.decode(compact)?)
}

/// Build a `data:<mime>;base64,<payload>` URI.
pub fn data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, encode_base64(bytes))
}

/// MIME type for an image path, by extension. Unknown extensions are
/// treated as PNG.
pub fn mime_for_path(path: &NormalizedPath) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "image/png",
    }
}

/// Read the image at `path` and return it as a data URI.
pub fn image_data_uri(path: &NormalizedPath) -> Result<String> {
    let bytes = io::read_bytes(path)?;
    let uri = data_uri(&bytes, mime_for_path(path));
    tracing::debug!(path = %path, bytes = bytes.len(), chars = uri.len(), "Encoded data URI");
    Ok(uri)
}

/// Base64-encode `source` into the text file `destination`.
///
/// With `as_data_uri` the text is a complete `data:` URI ready to paste into
/// an `src` attribute.
pub fn encode_file(
    source: &NormalizedPath,
    destination: &NormalizedPath,
    as_data_uri: bool,
) -> Result<TranscodeReport> {
    let bytes = io::read_bytes(source)?;
    tracing::debug!(path = %source, bytes = bytes.len(), "Read image");

    let text = if as_data_uri {
        data_uri(&bytes, mime_for_path(source))
    } else {
        encode_base64(&bytes)
    };
    io::write_text(destination, &text)?;
    tracing::info!(path = %destination, chars = text.len(), "Wrote base64");

    Ok(TranscodeReport {
        source: source.clone(),
        destination: destination.clone(),
        input_len: bytes.len(),
        output_len: text.len(),
    })
}

/// Decode the base64 text file `source` into the binary file `destination`.
pub fn decode_file(source: &NormalizedPath, destination: &NormalizedPath) -> Result<TranscodeReport> {
    let text = io::read_text(source)?;
    let bytes = decode_base64(&text)?;
    io::write_bytes(destination, &bytes)?;
    tracing::info!(path = %destination, bytes = bytes.len(), "Wrote decoded bytes");

    Ok(TranscodeReport {
        source: source.clone(),
        destination: destination.clone(),
        input_len: text.len(),
        output_len: bytes.len(),
    })
}
