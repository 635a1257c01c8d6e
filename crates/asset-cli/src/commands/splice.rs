//! Splice command implementation
//!
//! Replaces a marker-delimited block in a file and reports what changed.

use std::path::{Path, PathBuf};

use asset_blocks::{Markers, SpliceOptions, SpliceReport, splice_file};
use asset_fs::{NormalizedPath, io};
use colored::Colorize;

use crate::cli::{MarkerArgs, ReplacementArgs};
use crate::error::{CliError, Result};

/// Run the splice command
pub fn run_splice(
    file: &Path,
    markers: &MarkerArgs,
    replacement: &ReplacementArgs,
    output: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let text = match (&replacement.replacement, &replacement.replacement_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => io::read_text(&NormalizedPath::new(path))?,
        (None, None) => {
            return Err(CliError::user(
                "one of --replacement or --replacement-file is required",
            ));
        }
    };

    let markers = Markers::new(&markers.start, &markers.end)?;
    let report = splice(file, &markers, &text, output.map(Path::to_path_buf), dry_run)?;
    print_report(&report);
    Ok(())
}

/// Splice `replacement` into `file` with the default separator.
pub(crate) fn splice(
    file: &Path,
    markers: &Markers,
    replacement: &str,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<SpliceReport> {
    let options = SpliceOptions {
        destination: output.map(NormalizedPath::new),
        dry_run,
        ..SpliceOptions::default()
    };
    Ok(splice_file(
        &NormalizedPath::new(file),
        markers,
        replacement,
        &options,
    )?)
}

/// Print a one-line status, plus the diff for dry runs.
pub(crate) fn print_report(report: &SpliceReport) {
    let summary = report.summary();
    let stats = format!(
        "+{} -{} lines, {:+} bytes",
        summary.inserted,
        summary.deleted,
        report.size_delta()
    );

    if report.written {
        println!(
            "{} {} ({})",
            "Updated".green().bold(),
            report.destination.as_str().yellow(),
            stats
        );
        return;
    }

    println!(
        "{} {} ({})",
        "Would update".cyan().bold(),
        report.destination.as_str().yellow(),
        stats
    );
    println!();
    for line in report.diff().lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}
