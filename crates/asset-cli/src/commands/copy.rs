//! Copy command implementation

use std::path::Path;

use asset_fs::{NormalizedPath, io};
use colored::Colorize;

use crate::error::Result;

/// Run the copy command
///
/// Copies `source` to `destination`, verifies the copy and prints the
/// destination size.
pub fn run_copy(source: &Path, destination: &Path) -> Result<()> {
    let report = io::copy_file(&NormalizedPath::new(source), &NormalizedPath::new(destination))?;

    println!(
        "{} {} -> {} ({} bytes)",
        "Copied".green().bold(),
        report.source.as_str(),
        report.destination.as_str().yellow(),
        report.bytes
    );
    println!("  {}", report.checksum.dimmed());
    Ok(())
}
