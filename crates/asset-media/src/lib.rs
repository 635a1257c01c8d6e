//! Image transcoding, raster edits and icon generation for the asset toolkit.
//!
//! - [`encode`]: base64 and `data:` URIs
//! - [`raster`]: resize and crop through the `image` crate
//! - [`sun`]: the sun cursor SVG

pub mod encode;
pub mod error;
pub mod raster;
pub mod sun;

pub use encode::{TranscodeReport, data_uri, decode_base64, encode_base64, mime_for_path};
pub use error::{Error, Result};
pub use raster::{DEFAULT_CROP_FRACTION, ImageReport};
pub use sun::SunIcon;
