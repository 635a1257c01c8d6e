//! Embed command implementation
//!
//! Inlines an image as a data URI into a marked block.

use std::path::Path;

use asset_blocks::Markers;
use asset_fs::{NormalizedPath, io};
use asset_media::encode::image_data_uri;

use super::splice::{print_report, splice};
use crate::cli::MarkerArgs;
use crate::error::Result;
use crate::jobs::DATA_URI_PLACEHOLDER;

/// Read the template from a file if one exists at `template`, else use it
/// as literal text.
fn load_template(template: &str) -> Result<String> {
    let path = NormalizedPath::new(template);
    if path.is_file() {
        tracing::debug!(path = %path, "Reading template file");
        Ok(io::read_text(&path)?)
    } else {
        Ok(template.to_string())
    }
}

/// Run the embed command
pub fn run_embed(
    file: &Path,
    image: &Path,
    markers: &MarkerArgs,
    template: &str,
    output: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let markers = Markers::new(&markers.start, &markers.end)?;
    let template = load_template(template)?;
    if !template.contains(DATA_URI_PLACEHOLDER) {
        tracing::warn!("Template has no {} placeholder", DATA_URI_PLACEHOLDER);
    }

    let uri = image_data_uri(&NormalizedPath::new(image))?;
    let replacement = template.replace(DATA_URI_PLACEHOLDER, &uri);

    let report = splice(file, &markers, &replacement, output.map(Path::to_path_buf), dry_run)?;
    print_report(&report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embed_inlines_image() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("index.html");
        let image = dir.path().join("logo.png");
        fs::write(&file, "<!--S--><img src=\"logo.png\"><!--E-->").unwrap();
        fs::write(&image, b"hello").unwrap();
        let markers = MarkerArgs {
            start: "<!--S-->".into(),
            end: "<!--E-->".into(),
        };

        run_embed(&file, &image, &markers, "<!--S--><img src=\"{data_uri}\">", None, false)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "<!--S--><img src=\"data:image/png;base64,aGVsbG8=\">\n\n    <!--E-->"
        );
    }

    #[test]
    fn test_template_from_file() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("block.html");
        fs::write(&template, "<img src=\"{data_uri}\">").unwrap();

        let loaded = load_template(template.to_str().unwrap()).unwrap();

        assert_eq!(loaded, "<img src=\"{data_uri}\">");
        assert_eq!(load_template("literal {data_uri}").unwrap(), "literal {data_uri}");
    }
}
