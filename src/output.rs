use crate::planner::Dimensions;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Computes where a resized image is written.
///
/// With `overwrite` the input path is returned as is and `output_dir` is
/// ignored. Otherwise the file lands in `output_dir` (or next to the input)
/// as `{stem}_{W}x{H}{.ext}`, where only the final extension is split off
/// and its case is kept.
///
/// Pure: no I/O, creating the directory is the caller's job.
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
/// use img_resize::output::output_path;
/// use img_resize::planner::Dimensions;
///
/// let out = output_path(Path::new("/p/image.backup.jpg"), None, false, Dimensions::new(1920, 1080));
/// assert_eq!(out, PathBuf::from("/p/image.backup_1920x1080.jpg"));
/// ```
pub fn output_path(
    input_path: &Path,
    output_dir: Option<&Path>,
    overwrite: bool,
    size: Dimensions,
) -> PathBuf {
    if overwrite {
        return input_path.to_path_buf();
    }

    let dir = match output_dir {
        Some(dir) => dir,
        None => input_path.parent().unwrap_or_else(|| Path::new("")),
    };

    let mut file_name = OsString::from(input_path.file_stem().unwrap_or_default());
    file_name.push(format!("_{}", size));
    if let Some(ext) = input_path.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    dir.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_directory() {
        let out = output_path(Path::new("/p/image.jpg"), None, false, Dimensions::new(800, 600));
        assert_eq!(out, PathBuf::from("/p/image_800x600.jpg"));
    }

    #[test]
    fn test_custom_output_directory() {
        let out = output_path(
            Path::new("/path/to/image.png"),
            Some(Path::new("/output/dir")),
            false,
            Dimensions::new(400, 300),
        );
        assert_eq!(out, PathBuf::from("/output/dir/image_400x300.png"));
    }

    #[test]
    fn test_overwrite_ignores_output_directory() {
        let out = output_path(
            Path::new("/p/image.jpg"),
            Some(Path::new("/out")),
            true,
            Dimensions::new(800, 600),
        );
        assert_eq!(out, PathBuf::from("/p/image.jpg"));
    }

    #[test]
    fn test_only_final_extension_stripped() {
        let out = output_path(
            Path::new("/p/image.backup.jpg"),
            None,
            false,
            Dimensions::new(1920, 1080),
        );
        assert_eq!(out, PathBuf::from("/p/image.backup_1920x1080.jpg"));
    }

    #[test]
    fn test_extension_case_preserved() {
        let out = output_path(Path::new("/p/IMG_0042.JPG"), None, false, Dimensions::new(10, 20));
        assert_eq!(out, PathBuf::from("/p/IMG_0042_10x20.JPG"));
    }

    #[test]
    fn test_no_extension() {
        let out = output_path(Path::new("/path/to/imagefile"), None, false, Dimensions::new(100, 100));
        assert_eq!(out, PathBuf::from("/path/to/imagefile_100x100"));
    }

    #[test]
    fn test_relative_input_without_directory() {
        let out = output_path(Path::new("image.gif"), None, false, Dimensions::new(64, 48));
        assert_eq!(out, PathBuf::from("image_64x48.gif"));
    }

    #[test]
    fn test_idempotent() {
        let input = Path::new("/photos/summer/beach.tiff");
        let first = output_path(input, Some(Path::new("/out")), false, Dimensions::new(1, 2));
        let second = output_path(input, Some(Path::new("/out")), false, Dimensions::new(1, 2));
        assert_eq!(first, second);
    }
}
