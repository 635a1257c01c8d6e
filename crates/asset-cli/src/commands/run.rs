//! Run command implementation
//!
//! Executes every splice job in a job file. A failing job does not stop the
//! remaining ones, but any failure makes the command fail.

use std::path::Path;

use asset_blocks::{SpliceOptions, splice_file};
use asset_fs::NormalizedPath;
use colored::Colorize;

use super::splice::print_report;
use crate::error::{CliError, Result};
use crate::jobs::{JobFile, SpliceJob, resolve};

fn run_job(job: &SpliceJob, base: &NormalizedPath, dry_run: bool) -> Result<()> {
    let replacement = job.replacement_text(base)?;
    let options = SpliceOptions {
        destination: job.destination_path.as_deref().map(|p| resolve(base, p)),
        dry_run,
        ..SpliceOptions::default()
    };
    let report = splice_file(
        &resolve(base, &job.source_path),
        &job.markers,
        &replacement,
        &options,
    )?;
    print_report(&report);
    Ok(())
}

/// Run the jobs in `path`
pub fn run_jobs(path: &Path, dry_run: bool) -> Result<()> {
    let path = NormalizedPath::new(path);
    let file = JobFile::load(&path)?;
    let base = path.parent().unwrap_or_else(|| NormalizedPath::new("."));

    let mut failed = 0;
    for (index, job) in file.jobs.iter().enumerate() {
        let label = job.label(index);
        println!("{} {}", "Job".blue().bold(), label);
        if let Err(e) = run_job(job, &base, dry_run) {
            tracing::warn!(job = %label, error = %e, "Job failed");
            eprintln!("  {} {}", "!".red(), e);
            failed += 1;
        }
    }

    let total = file.jobs.len();
    if failed > 0 {
        return Err(CliError::user(format!("{failed} of {total} jobs failed")));
    }
    println!(
        "{} {} job(s) {}",
        "OK".green().bold(),
        total,
        if dry_run { "checked" } else { "applied" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const JOBS: &str = r#"
[[jobs]]
name = "first"
source_path = "a.html"
replacement = "<!--S--> A"

[jobs.markers]
start = "<!--S-->"
end = "<!--E-->"

[[jobs]]
source_path = "b.html"
destination_path = "out/b.html"
replacement_file = "block.html"

[jobs.markers]
start = "<!--S-->"
end = "<!--E-->"
"#;

    #[test]
    fn test_runs_all_jobs_relative_to_job_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("jobs.toml"), JOBS).unwrap();
        fs::write(dir.path().join("a.html"), "<!--S-->old<!--E-->").unwrap();
        fs::write(dir.path().join("b.html"), "x <!--S-->old<!--E--> y").unwrap();
        fs::write(dir.path().join("block.html"), "<!--S--> B\n").unwrap();

        run_jobs(&dir.path().join("jobs.toml"), false).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("a.html")).unwrap(),
            "<!--S--> A\n\n    <!--E-->"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("b.html")).unwrap(),
            "x <!--S-->old<!--E--> y"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("out/b.html")).unwrap(),
            "x <!--S--> B\n\n    <!--E--> y"
        );
    }

    #[test]
    fn test_failed_job_does_not_block_others() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("jobs.toml"), JOBS).unwrap();
        fs::write(dir.path().join("a.html"), "no markers").unwrap();
        fs::write(dir.path().join("b.html"), "<!--S-->old<!--E-->").unwrap();
        fs::write(dir.path().join("block.html"), "<!--S--> B").unwrap();

        let err = run_jobs(&dir.path().join("jobs.toml"), false).unwrap_err();

        assert_eq!(err.to_string(), "1 of 2 jobs failed");
        assert_eq!(fs::read_to_string(dir.path().join("a.html")).unwrap(), "no markers");
        assert!(dir.path().join("out/b.html").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("jobs.toml"), JOBS).unwrap();
        fs::write(dir.path().join("a.html"), "<!--S-->old<!--E-->").unwrap();
        fs::write(dir.path().join("b.html"), "<!--S-->old<!--E-->").unwrap();
        fs::write(dir.path().join("block.html"), "<!--S--> B").unwrap();

        run_jobs(&dir.path().join("jobs.toml"), true).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("a.html")).unwrap(),
            "<!--S-->old<!--E-->"
        );
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_empty_job_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("jobs.json"), r#"{"jobs": []}"#).unwrap();

        let err = run_jobs(&dir.path().join("jobs.json"), false).unwrap_err();

        assert!(err.to_string().starts_with("No jobs in"));
    }
}
