//! CLI argument parsing using clap derive

use std::path::PathBuf;

use asset_media::DEFAULT_CROP_FRACTION;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Asset toolkit - splice marked blocks in web pages and prepare image assets
#[derive(Parser, Debug)]
#[command(name = "asset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also append logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Start and end markers delimiting the block to replace.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct MarkerArgs {
    /// Literal start marker (kept only if the replacement contains it)
    #[arg(long)]
    pub start: String,

    /// Literal end marker (always kept)
    #[arg(long)]
    pub end: String,
}

/// Where the replacement block comes from.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct ReplacementArgs {
    /// Replacement text
    #[arg(long)]
    pub replacement: Option<String>,

    /// Read the replacement text from a file
    #[arg(long, value_name = "PATH")]
    pub replacement_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Replace the block between two markers in a file
    ///
    /// The span from the start marker up to the end marker is replaced by
    /// the replacement (trailing whitespace trimmed) followed by a blank
    /// line and four spaces of indentation. The end marker is kept.
    ///
    /// Examples:
    ///   asset splice index.html --start '<!--S-->' --end '<!--E-->' --replacement '<!--S--> new'
    ///   asset splice index.html --start '<!--S-->' --end '<!--E-->' --replacement-file block.html --dry-run
    Splice {
        /// File containing the markers
        file: PathBuf,

        #[command(flatten)]
        markers: MarkerArgs,

        #[command(flatten)]
        replacement: ReplacementArgs,

        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Inline an image as a data URI into a marked block
    ///
    /// Every `{data_uri}` in the template is replaced by the image's data
    /// URI before splicing. The template is read from a file when one
    /// exists at the given path, otherwise it is used as literal text.
    Embed {
        /// File containing the markers
        file: PathBuf,

        /// Image to inline
        #[arg(long)]
        image: PathBuf,

        #[command(flatten)]
        markers: MarkerArgs,

        /// Template file or literal template text
        #[arg(long)]
        template: String,

        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the diff without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Copy a file and verify the copy
    Copy {
        /// File to copy
        source: PathBuf,

        /// Destination path
        destination: PathBuf,
    },

    /// Base64-encode a file into a text file
    Encode {
        /// File to encode
        source: PathBuf,

        /// Text file to write
        destination: PathBuf,

        /// Write a complete `data:` URI instead of bare base64
        #[arg(long)]
        data_uri: bool,
    },

    /// Decode a base64 text file (or data URI) back to binary
    Decode {
        /// Text file to decode
        source: PathBuf,

        /// Binary file to write
        destination: PathBuf,
    },

    /// Resize an image to exact dimensions (written as PNG)
    Resize {
        /// Image to resize
        source: PathBuf,

        /// PNG file to write
        destination: PathBuf,

        /// Target width in pixels
        #[arg(long)]
        width: u32,

        /// Target height in pixels
        #[arg(long)]
        height: u32,

        /// Also write the resized image as base64 to this file
        #[arg(long, value_name = "PATH")]
        base64_out: Option<PathBuf>,
    },

    /// Remove a fraction of an image's height from the bottom
    Crop {
        /// Image to crop
        source: PathBuf,

        /// Write here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Share of the height to remove, in [0, 1)
        #[arg(long, default_value_t = DEFAULT_CROP_FRACTION)]
        fraction: f64,
    },

    /// Generate the sun cursor SVG
    Sun {
        /// SVG file to write
        #[arg(short, long, default_value = "sun_cursor.svg")]
        output: PathBuf,

        /// Number of rays
        #[arg(long, default_value_t = 12)]
        rays: u32,

        /// Rendered size in pixels
        #[arg(long, default_value_t = 32)]
        size: u32,
    },

    /// Run the splice jobs listed in a TOML, JSON or YAML file
    ///
    /// Relative paths in the job file are resolved against the job file's
    /// directory.
    Run {
        /// Job file
        jobs: PathBuf,

        /// Show diffs without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
