//! Canned documents and generated images.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

/// Start marker used by [`LANDING_PAGE`].
pub const LOGO_START: &str = "<!-- UNIFIED COMMAND CENTER (Moved to root for z-index) -->";

/// End marker used by [`LANDING_PAGE`].
pub const LOGO_END: &str = "<!-- Loading Screen -->";

/// A page with a broken logo block between [`LOGO_START`] and [`LOGO_END`].
pub const LANDING_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<body>
    <!-- UNIFIED COMMAND CENTER (Moved to root for z-index) -->
    <a href="#" onclick="window.location.reload()">
        <img src="binaural-assets/img/logo.png" alt="MindWave Logo">
    </a>

    <!-- Loading Screen -->
    <div id="loading">Loading...</div>
</body>
</html>
"##;

/// Encode a `width` x `height` PNG.
///
/// The top half is opaque teal and the bottom half transparent, so crops
/// and resizes leave visible traces in the pixel data.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |_, y| {
        if y < height / 2 {
            Rgba([45, 212, 191, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("encoding an in-memory PNG cannot fail");
    buf.into_inner()
}
