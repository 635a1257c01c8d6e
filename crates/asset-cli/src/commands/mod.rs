//! Command implementations for asset-cli

pub mod completions;
pub mod copy;
pub mod embed;
pub mod encode;
pub mod image;
pub mod run;
pub mod splice;

pub use completions::run_completions;
pub use copy::run_copy;
pub use embed::run_embed;
pub use encode::{run_decode, run_encode};
pub use image::{run_crop, run_resize, run_sun};
pub use run::run_jobs;
pub use splice::run_splice;
