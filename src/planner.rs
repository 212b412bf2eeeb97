//! Target-size planning.
//!
//! Ratio arithmetic divides in `f64` and truncates toward zero when
//! converting back to whole pixels, so 1000x333 at width 500 plans 500x166.
//! An anchored axis is never planned below one pixel.

use crate::config::ResizeRequest;
use std::fmt;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Stretch to exactly the target size, aspect ratio may change
    Exact,
    WidthAnchored,
    HeightAnchored,
    /// Scale to fit inside the target box preserving aspect ratio
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub target: Dimensions,
    pub mode: ResizeMode,
}

/// Computes the target size and resize mode for an image of `original` size.
///
/// A dimension counts as requested when it was supplied and is non-zero; an
/// explicit `0` means "auto" for that axis. `original` must be non-zero on
/// both axes, which holds for any successfully decoded image.
pub fn plan(original: Dimensions, request: &ResizeRequest) -> ResizePlan {
    let width = Some(request.width).filter(|&w| request.width_set && w > 0);
    let height = Some(request.height).filter(|&h| request.height_set && h > 0);

    match (width, height) {
        (Some(w), Some(h)) => ResizePlan {
            target: Dimensions::new(w, h),
            mode: if request.keep_ratio {
                ResizeMode::Fit
            } else {
                ResizeMode::Exact
            },
        },
        (Some(w), None) => ResizePlan {
            target: Dimensions::new(w, scale(w, original.height, original.width)),
            mode: ResizeMode::WidthAnchored,
        },
        (None, Some(h)) => ResizePlan {
            target: Dimensions::new(scale(h, original.width, original.height), h),
            mode: ResizeMode::HeightAnchored,
        },
        (None, None) => {
            error!(
                width = request.width,
                height = request.height,
                "resize request has no usable dimension, keeping original size"
            );
            ResizePlan {
                target: original,
                mode: ResizeMode::Exact,
            }
        }
    }
}

/// `anchor * numerator / denominator`, truncated, at least 1.
fn scale(anchor: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = f64::from(anchor) * f64::from(numerator) / f64::from(denominator);
    (scaled as u32).max(1)
}
