use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "image-text-formatter",
    version,
    about = "Extract text from an image and reformat it with your own template"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the text in an image and format it
    Format(FormatArgs),
    /// Manage the stored Gemini API key
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    #[arg(long, help = "Image file (PNG, JPG, WEBP, ...)")]
    pub image: PathBuf,
    #[arg(
        long,
        conflicts_with = "template_file",
        required_unless_present = "template_file",
        help = "Layout with placeholders or a plain-language instruction"
    )]
    pub template: Option<String>,
    #[arg(long, help = "Read the template from a file")]
    pub template_file: Option<PathBuf>,
    #[arg(long, help = "Copy the formatted text to the clipboard")]
    pub copy: bool,
    #[arg(long, help = "Also write the formatted text to this file")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Give up on the request after this many seconds")]
    pub timeout: Option<u64>,
    #[arg(long, help = "Declare the image as image/jpeg whatever its real type")]
    pub legacy_jpeg_mime: bool,
}

#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    Set { api_key: String },
    Clear,
    Status,
}
