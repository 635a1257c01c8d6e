//! Shared test utilities for the asset toolkit workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`] - canned HTML documents and generated PNG images
//! - [`workspace`] - [`TestWorkspace`](workspace::TestWorkspace) temp directory builder

pub mod fixtures;
pub mod workspace;

pub use workspace::TestWorkspace;
