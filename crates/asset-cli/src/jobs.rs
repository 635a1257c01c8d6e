//! Job files for `asset run`.
//!
//! A job file lists splice jobs in TOML, JSON or YAML:
//!
//! ```toml
//! [[jobs]]
//! name = "inline logo"
//! source_path = "public/mindwave.html"
//! image = "public/mindwave-logo.png"
//! replacement = '<img src="{data_uri}" alt="MindWave Logo">'
//!
//! [jobs.markers]
//! start = "<!-- UNIFIED COMMAND CENTER (Moved to root for z-index) -->"
//! end = "<!-- Loading Screen -->"
//! ```
//!
//! Relative paths are resolved against the job file's directory.

use std::path::{Path, PathBuf};

use asset_blocks::Markers;
use asset_fs::{ConfigStore, NormalizedPath, io};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Placeholder replaced by the image's data URI when a job sets `image`.
pub const DATA_URI_PLACEHOLDER: &str = "{data_uri}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    #[serde(default)]
    pub jobs: Vec<SpliceJob>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpliceJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub source_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_path: Option<PathBuf>,
    pub markers: Markers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve(base: &NormalizedPath, path: &Path) -> NormalizedPath {
    if path.is_absolute() {
        NormalizedPath::new(path)
    } else {
        base.join(&path.to_string_lossy())
    }
}

impl JobFile {
    /// Load and validate a job file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let file: JobFile = ConfigStore::new().load(path)?;
        if file.jobs.is_empty() {
            return Err(CliError::user(format!("No jobs in {}", path)));
        }
        for (index, job) in file.jobs.iter().enumerate() {
            job.validate(index)?;
        }
        tracing::debug!(path = %path, jobs = file.jobs.len(), "Loaded job file");
        Ok(file)
    }
}

impl SpliceJob {
    /// Display label: the job's name, or its position and source.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{} {}", index + 1, self.source_path.display()),
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        match (&self.replacement, &self.replacement_file) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            _ => Err(CliError::user(format!(
                "Job {}: exactly one of `replacement` or `replacement_file` is required",
                self.label(index)
            ))),
        }
    }

    /// The replacement text, with the image data URI substituted in.
    pub fn replacement_text(&self, base: &NormalizedPath) -> Result<String> {
        let text = match (&self.replacement, &self.replacement_file) {
            (Some(text), None) => text.clone(),
            (None, Some(file)) => io::read_text(&resolve(base, file))?,
            _ => {
                return Err(CliError::user(
                    "exactly one of `replacement` or `replacement_file` is required",
                ));
            }
        };

        match &self.image {
            Some(image) => {
                let uri = asset_media::encode::image_data_uri(&resolve(base, image))?;
                Ok(text.replace(DATA_URI_PLACEHOLDER, &uri))
            }
            None => Ok(text),
        }
    }
}
