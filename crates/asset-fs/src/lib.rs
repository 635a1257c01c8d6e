//! Filesystem layer for the asset toolkit
//!
//! Provides normalized path handling, whole-file I/O with atomic writes,
//! verified copies and format-agnostic config loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::CopyReport;
pub use path::NormalizedPath;
