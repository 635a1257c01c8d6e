//! Raster and icon command implementations

use std::path::Path;

use asset_fs::{NormalizedPath, io};
use asset_media::raster::{ImageReport, crop_bottom, resize, resize_to_png_bytes};
use asset_media::{SunIcon, encode_base64};
use colored::Colorize;

use crate::error::Result;

fn print_image(verb: &str, report: &ImageReport) {
    println!(
        "{} {} ({}x{})",
        verb.green().bold(),
        report.destination.as_str().yellow(),
        report.width,
        report.height
    );
}

/// Run the resize command
///
/// With `base64_out`, the resized PNG is also written there as base64.
pub fn run_resize(
    source: &Path,
    destination: &Path,
    width: u32,
    height: u32,
    base64_out: Option<&Path>,
) -> Result<()> {
    let source = NormalizedPath::new(source);
    let destination = NormalizedPath::new(destination);

    let Some(base64_out) = base64_out else {
        let report = resize(&source, &destination, width, height)?;
        print_image("Resized", &report);
        return Ok(());
    };

    // Encode the same PNG bytes that are written, without reading them back.
    let png = resize_to_png_bytes(&source, width, height)?;
    io::write_bytes(&destination, &png)?;
    print_image(
        "Resized",
        &ImageReport {
            source,
            destination,
            width,
            height,
        },
    );

    let base64_out = NormalizedPath::new(base64_out);
    let encoded = encode_base64(&png);
    io::write_text(&base64_out, &encoded)?;
    println!(
        "{} {} ({} chars)",
        "Encoded".green().bold(),
        base64_out.as_str().yellow(),
        encoded.len()
    );
    Ok(())
}

/// Run the crop command
pub fn run_crop(source: &Path, output: Option<&Path>, fraction: f64) -> Result<()> {
    let output = output.map(NormalizedPath::new);
    let report = crop_bottom(&NormalizedPath::new(source), output.as_ref(), fraction)?;
    print_image("Cropped", &report);
    Ok(())
}

/// Run the sun command
pub fn run_sun(output: &Path, rays: u32, size: u32) -> Result<()> {
    let icon = SunIcon {
        rays,
        size,
        ..SunIcon::default()
    };
    let output = NormalizedPath::new(output);
    icon.write_svg(&output)?;

    println!(
        "{} {} ({} rays, {}px)",
        "Generated".green().bold(),
        output.as_str().yellow(),
        rays,
        size
    );
    Ok(())
}
