use crate::constants::{DEFAULT_QUALITY, DEFAULT_WORKERS};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-resize",
    about = "A fast batch image resizing tool",
    long_about = "img-resize resizes one or more images to target dimensions. \
                  Input can be a single file, a directory (walked recursively), a glob pattern \
                  or several files at once. Supports JPEG, PNG, GIF, TIFF and BMP.\n\n\
                  If only width or height is given, the other dimension is calculated \
                  to preserve the aspect ratio. With neither, images are resized to 800x600.",
    version,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true,
    after_help = "EXAMPLES:\n  \
    img-resize photo.jpg -w 1920\n  \
    img-resize ./photos --height 600 -o ./resized\n  \
    img-resize \"./photos/*.png\" -w 800 --height 600 -k\n  \
    img-resize a.jpg b.jpg c.png --overwrite -w 1024"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(
        required = true,
        value_name = "PATH",
        help = "Image file, directory or glob pattern",
        long_help = "One or more image files, a directory, or a glob pattern. \
                     Examples: 'photo.jpg', './photos', './photos/*.jpg', 'a.jpg b.png'"
    )]
    pub inputs: Vec<String>,

    #[arg(
        short = 'w',
        long,
        allow_hyphen_values = true,
        help = "Output width in pixels (0 = auto based on height)"
    )]
    pub width: Option<i64>,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Output height in pixels (0 = auto based on width)"
    )]
    pub height: Option<i64>,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        allow_hyphen_values = true,
        help = "JPEG quality (1-100)",
        long_help = "JPEG encoding quality from 1 (lowest) to 100 (highest). \
                     Other formats are written with their default settings."
    )]
    pub quality: i64,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Output directory (default: same as input)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'k',
        long,
        help = "Keep aspect ratio when both width and height are specified",
        long_help = "When both width and height are given, scale the image to fit inside \
                     the box instead of stretching it to the exact size."
    )]
    pub keep_ratio: bool,

    #[arg(
        short = 'b',
        long,
        help = "Batch process all images under the input path",
        long_help = "Walk the input path recursively and process every supported image, \
                     even when the path is not a directory."
    )]
    pub batch: bool,

    #[arg(
        long,
        default_value_t = DEFAULT_WORKERS,
        help = "Number of parallel workers for batch processing"
    )]
    pub workers: usize,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        help = "Overwrite original files instead of creating new ones",
        long_help = "Replace each input file in place. Cannot be combined with --output."
    )]
    pub overwrite: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Print version and build information")]
    Version,
}
