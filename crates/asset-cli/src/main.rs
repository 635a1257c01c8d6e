//! Asset toolkit CLI
//!
//! Splices marker-delimited blocks in web pages and prepares the image
//! assets (logos, cursors, icons) those blocks reference.

mod cli;
mod commands;
mod error;
mod jobs;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Asset toolkit CLI", "asset".green().bold());
            println!();
            println!("Run {} for available commands.", "asset --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    tracing::debug!(command = ?cmd, "Executing");
    match cmd {
        Commands::Splice {
            file,
            markers,
            replacement,
            output,
            dry_run,
        } => commands::run_splice(&file, &markers, &replacement, output.as_deref(), dry_run),
        Commands::Embed {
            file,
            image,
            markers,
            template,
            output,
            dry_run,
        } => commands::run_embed(&file, &image, &markers, &template, output.as_deref(), dry_run),
        Commands::Copy {
            source,
            destination,
        } => commands::run_copy(&source, &destination),
        Commands::Encode {
            source,
            destination,
            data_uri,
        } => commands::run_encode(&source, &destination, data_uri),
        Commands::Decode {
            source,
            destination,
        } => commands::run_decode(&source, &destination),
        Commands::Resize {
            source,
            destination,
            width,
            height,
            base64_out,
        } => commands::run_resize(&source, &destination, width, height, base64_out.as_deref()),
        Commands::Crop {
            source,
            output,
            fraction,
        } => commands::run_crop(&source, output.as_deref(), fraction),
        Commands::Sun { output, rays, size } => commands::run_sun(&output, rays, size),
        Commands::Run { jobs, dry_run } => commands::run_jobs(&jobs, dry_run),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
