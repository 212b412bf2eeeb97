use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Cannot access path {path}: {source}")]
    PathInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No image files found in: {0}")]
    NoImagesFound(String),

    #[error("Failed to walk directory {path}: {source}")]
    DirectoryWalkFailed {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to open image {path}: {source}")]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to save image {path}: {source}")]
    EncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(i64),

    #[error("Width and height must be positive numbers (got width {0}, height {1})")]
    NegativeDimensions(i64, i64),

    #[error("At least one of width or height must be specified")]
    MissingDimensions,

    #[error("Dimension {0} exceeds the maximum of {1} pixels")]
    DimensionTooLarge(i64, u32),

    #[error("Cannot use --overwrite with --output: --overwrite replaces original files in place")]
    ConflictingOutputMode,

    #[error("Worker count must be greater than zero")]
    InvalidWorkerCount,

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Task queue closed before {0} was queued")]
    TaskQueueClosed(PathBuf),
}

impl ResizeError {
    /// True for failures that only affect the file being processed and are
    /// folded into the batch summary instead of aborting the run.
    pub fn is_file_scoped(&self) -> bool {
        matches!(
            self,
            ResizeError::DecodeFailed { .. }
                | ResizeError::UnsupportedFormat(_)
                | ResizeError::EncodeFailed { .. }
                | ResizeError::OutputDirCreateFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ResizeError>;
