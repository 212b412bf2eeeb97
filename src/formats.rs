//! Image format utilities shared by input discovery and encoding
//!
//! The extension whitelist lives here once so that the directory walk, the
//! glob filter and the multi-argument filter all agree on what an image is.

use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{ResizeError, Result};
use image::ImageFormat;
use std::fmt;
use std::path::Path;

/// Check if a file path has a supported image extension (case-insensitive)
///
/// # Arguments
/// * `path` - The file path to check
///
/// # Returns
/// * `true` for jpg, jpeg, png, gif, tiff, tif and bmp, `false` otherwise
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Encoder selected for a resized image, dictated by the input extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeFormat {
    /// JPEG with the configured quality
    Jpeg { quality: u8 },
    Png,
    Gif,
    Tiff,
    Bmp,
}

impl EncodeFormat {
    /// Picks the encoder for `input_path`. Only JPEG takes the quality
    /// setting; every other format is written with its default settings.
    pub fn for_input(input_path: &Path, quality: u8) -> Result<Self> {
        let ext = input_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "jpg" | "jpeg" => Ok(EncodeFormat::Jpeg { quality }),
            "png" => Ok(EncodeFormat::Png),
            "gif" => Ok(EncodeFormat::Gif),
            "tiff" | "tif" => Ok(EncodeFormat::Tiff),
            "bmp" => Ok(EncodeFormat::Bmp),
            _ => Err(ResizeError::UnsupportedFormat(if ext.is_empty() {
                format!("{} has no file extension", input_path.display())
            } else {
                format!(".{}", ext)
            })),
        }
    }

    /// Convert to the image crate's ImageFormat
    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            EncodeFormat::Jpeg { .. } => ImageFormat::Jpeg,
            EncodeFormat::Png => ImageFormat::Png,
            EncodeFormat::Gif => ImageFormat::Gif,
            EncodeFormat::Tiff => ImageFormat::Tiff,
            EncodeFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

impl fmt::Display for EncodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeFormat::Jpeg { quality } => write!(f, "JPEG (quality {})", quality),
            EncodeFormat::Png => write!(f, "PNG"),
            EncodeFormat::Gif => write!(f, "GIF"),
            EncodeFormat::Tiff => write!(f, "TIFF"),
            EncodeFormat::Bmp => write!(f, "BMP"),
        }
    }
}
