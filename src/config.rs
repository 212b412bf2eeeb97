use crate::cli::Args;
use crate::constants::{
    DEFAULT_HEIGHT, DEFAULT_QUALITY, DEFAULT_WIDTH, DEFAULT_WORKERS, MAX_QUALITY, MIN_QUALITY,
};
use crate::error::{ResizeError, Result};
use std::path::{Path, PathBuf};

/// Validated, read-only settings for one run.
///
/// Built once from the command line and shared by reference with the path
/// resolver and every worker; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeRequest {
    pub width: u32,
    pub height: u32,
    /// Whether the user supplied `--width` (distinct from the value being 0)
    pub width_set: bool,
    pub height_set: bool,
    pub keep_ratio: bool,
    pub output_dir: Option<PathBuf>,
    pub overwrite: bool,
    pub quality: u8,
    pub workers: usize,
    pub batch: bool,
    pub verbose: bool,
}

impl Default for ResizeRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            width_set: true,
            height_set: true,
            keep_ratio: false,
            output_dir: None,
            overwrite: false,
            quality: DEFAULT_QUALITY as u8,
            workers: DEFAULT_WORKERS,
            batch: false,
            verbose: false,
        }
    }
}

impl ResizeRequest {
    /// Applies the 800x600 default and every validation rule.
    ///
    /// # Errors
    /// * `NegativeDimensions` - width or height below zero
    /// * `MissingDimensions` - both dimensions resolve to zero
    /// * `DimensionTooLarge` - a dimension does not fit in `u32`
    /// * `InvalidQuality` - quality outside 1..=100
    /// * `ConflictingOutputMode` - `--overwrite` together with `--output`
    /// * `InvalidWorkerCount` - zero workers
    pub fn from_args(args: &Args) -> Result<Self> {
        let (width, height, width_set, height_set) = match (args.width, args.height) {
            (None, None) => (i64::from(DEFAULT_WIDTH), i64::from(DEFAULT_HEIGHT), true, true),
            (w, h) => (w.unwrap_or(0), h.unwrap_or(0), w.is_some(), h.is_some()),
        };

        if width < 0 || height < 0 {
            return Err(ResizeError::NegativeDimensions(width, height));
        }
        if width == 0 && height == 0 {
            return Err(ResizeError::MissingDimensions);
        }
        let width = to_pixels(width)?;
        let height = to_pixels(height)?;

        if !(MIN_QUALITY..=MAX_QUALITY).contains(&args.quality) {
            return Err(ResizeError::InvalidQuality(args.quality));
        }
        let quality = args.quality as u8;

        let output_dir = args
            .output
            .clone()
            .filter(|dir| !dir.as_os_str().is_empty());
        if args.overwrite && output_dir.is_some() {
            return Err(ResizeError::ConflictingOutputMode);
        }

        if args.workers == 0 {
            return Err(ResizeError::InvalidWorkerCount);
        }

        Ok(Self {
            width,
            height,
            width_set,
            height_set,
            keep_ratio: args.keep_ratio,
            output_dir,
            overwrite: args.overwrite,
            quality,
            workers: args.workers,
            batch: args.batch,
            verbose: args.verbose,
        })
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}

fn to_pixels(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ResizeError::DimensionTooLarge(value, u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn request(argv: &[&str]) -> Result<ResizeRequest> {
        let mut full = vec!["img-resize", "photo.jpg"];
        full.extend_from_slice(argv);
        ResizeRequest::from_args(&Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_defaults_to_800x600() {
        let req = request(&[]).unwrap();
        assert_eq!((req.width, req.height), (800, 600));
        assert!(req.width_set && req.height_set);
        assert_eq!(req.quality, 95);
        assert_eq!(req.workers, 4);
        assert_eq!(req, ResizeRequest::default());
    }

    #[test]
    fn test_width_only() {
        let req = request(&["-w", "400"]).unwrap();
        assert_eq!(req.width, 400);
        assert_eq!(req.height, 0);
        assert!(req.width_set);
        assert!(!req.height_set);
    }

    #[test]
    fn test_height_only() {
        let req = request(&["--height", "300"]).unwrap();
        assert_eq!(req.height, 300);
        assert!(!req.width_set);
        assert!(req.height_set);
    }

    #[test]
    fn test_explicit_zero_is_still_set() {
        let req = request(&["-w", "0", "--height", "300"]).unwrap();
        assert!(req.width_set && req.height_set);
        assert_eq!(req.width, 0);
    }

    #[test]
    fn test_negative_dimensions() {
        assert!(matches!(
            request(&["-w", "-1"]),
            Err(ResizeError::NegativeDimensions(-1, 0))
        ));
        assert!(matches!(
            request(&["--height", "-20"]),
            Err(ResizeError::NegativeDimensions(0, -20))
        ));
    }

    #[test]
    fn test_both_zero() {
        assert!(matches!(
            request(&["-w", "0", "--height", "0"]),
            Err(ResizeError::MissingDimensions)
        ));
        assert!(matches!(request(&["-w", "0"]), Err(ResizeError::MissingDimensions)));
    }

    #[test]
    fn test_dimension_too_large() {
        assert!(matches!(
            request(&["-w", "5000000000"]),
            Err(ResizeError::DimensionTooLarge(5_000_000_000, _))
        ));
    }

    #[test]
    fn test_invalid_quality() {
        assert!(matches!(request(&["-q", "0"]), Err(ResizeError::InvalidQuality(0))));
        assert!(matches!(request(&["-q", "101"]), Err(ResizeError::InvalidQuality(101))));
        assert!(matches!(request(&["-q", "-3"]), Err(ResizeError::InvalidQuality(-3))));
        assert_eq!(request(&["-q", "1"]).unwrap().quality, 1);
        assert_eq!(request(&["-q", "100"]).unwrap().quality, 100);
    }

    #[test]
    fn test_overwrite_conflicts_with_output() {
        assert!(matches!(
            request(&["--overwrite", "-o", "out"]),
            Err(ResizeError::ConflictingOutputMode)
        ));

        let req = request(&["--overwrite"]).unwrap();
        assert!(req.overwrite);
        assert!(req.output_dir().is_none());
    }

    #[test]
    fn test_zero_workers() {
        assert!(matches!(
            request(&["--workers", "0"]),
            Err(ResizeError::InvalidWorkerCount)
        ));
    }

    #[test]
    fn test_output_dir() {
        let req = request(&["-o", "/tmp/resized"]).unwrap();
        assert_eq!(req.output_dir(), Some(Path::new("/tmp/resized")));
    }
}
