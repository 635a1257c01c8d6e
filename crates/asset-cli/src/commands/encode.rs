//! Encode and decode command implementations

use std::path::Path;

use asset_fs::NormalizedPath;
use asset_media::encode::{decode_file, encode_file};
use colored::Colorize;

use crate::error::Result;

/// Run the encode command
pub fn run_encode(source: &Path, destination: &Path, data_uri: bool) -> Result<()> {
    let report = encode_file(
        &NormalizedPath::new(source),
        &NormalizedPath::new(destination),
        data_uri,
    )?;

    println!(
        "{} {} ({} bytes -> {} chars)",
        "Encoded".green().bold(),
        report.destination.as_str().yellow(),
        report.input_len,
        report.output_len
    );
    Ok(())
}

/// Run the decode command
pub fn run_decode(source: &Path, destination: &Path) -> Result<()> {
    let report = decode_file(&NormalizedPath::new(source), &NormalizedPath::new(destination))?;

    println!(
        "{} {} ({} bytes)",
        "Decoded".green().bold(),
        report.destination.as_str().yellow(),
        report.output_len
    );
    Ok(())
}
