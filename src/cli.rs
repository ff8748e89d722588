use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_ZIP_NAME;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split a PDF into numbered single-page PDFs bundled in a ZIP archive")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Split pages into individual PDFs inside a ZIP archive
    #[command(alias = "burst")]
    Split {
        /// PDF file to split
        path: Option<PathBuf>,

        /// Page ranges (e.g., "1-5,8,10-12"); "01-05" pads numbers to two digits
        #[arg(short, long, default_value = "")]
        ranges: String,

        /// Pages to leave out (e.g., "2,4")
        #[arg(short = 'x', long = "exclude", default_value = "")]
        exclusions: String,

        /// Text before the page number in each file name
        #[arg(long, default_value = "")]
        prefix: String,

        /// Text after the page number in each file name
        #[arg(long, default_value = "")]
        suffix: String,

        /// Archive base name, without ".zip"
        #[arg(short, long, default_value = DEFAULT_ZIP_NAME)]
        zip_name: String,

        /// Directory to write the archive into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Print the result manifest as JSON
        #[arg(long)]
        json: bool,

        /// Only print the file names that would be produced
        #[arg(long)]
        dry_run: bool,
    },
}
