pub const DEFAULT_QUALITY: i64 = 95;
pub const MIN_QUALITY: i64 = 1;
pub const MAX_QUALITY: i64 = 100;

/// Applied when neither `--width` nor `--height` is given.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

pub const DEFAULT_WORKERS: usize = 4;

/// Extensions (lower-case, without the dot) accepted as input images.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff", "tif", "bmp"];

/// Characters that make a single argument a glob pattern instead of a path.
pub const GLOB_METACHARACTERS: &[char] = &['*', '?', '['];

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";
pub const WORKER_THREAD_PREFIX: &str = "resize-worker";

// Build metadata injected by release tooling
pub const BUILD_COMMIT: Option<&str> = option_env!("IMG_RESIZE_COMMIT");
pub const BUILD_DATE: Option<&str> = option_env!("IMG_RESIZE_BUILD_DATE");
pub const BUILT_BY: Option<&str> = option_env!("IMG_RESIZE_BUILT_BY");
