pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod formats;
pub mod logger;
pub mod output;
pub mod planner;
pub mod processing;
pub mod utils;

pub use batch::{run_batch, BatchSummary, FileOutcome};
pub use config::ResizeRequest;
pub use discovery::{resolve_inputs, InputSelection, ResolvedInputs, RunMode};
pub use error::{ResizeError, Result};
pub use formats::{is_image_file, EncodeFormat};
pub use output::output_path;
pub use planner::{plan, Dimensions, ResizeMode, ResizePlan};
pub use processing::{process_file, ImageCodec, ImageCrateCodec, ResizeReport};
pub use utils::format_file_size;
