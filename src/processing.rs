use crate::config::ResizeRequest;
use crate::error::{ResizeError, Result};
use crate::formats::EncodeFormat;
use crate::output::output_path;
use crate::planner::{plan, Dimensions, ResizeMode, ResizePlan};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Decode, resample and encode capability used by the pipeline.
pub trait ImageCodec: Sync {
    fn decode(&self, path: &Path) -> Result<DynamicImage>;

    fn resize(&self, image: &DynamicImage, plan: &ResizePlan) -> DynamicImage;

    fn encode(&self, image: &DynamicImage, path: &Path, format: EncodeFormat) -> Result<()>;
}

/// [`ImageCodec`] backed by the `image` crate with Lanczos3 resampling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, path: &Path) -> Result<DynamicImage> {
        let decode_failed = |source: ImageError| ResizeError::DecodeFailed {
            path: path.to_path_buf(),
            source,
        };

        ImageReader::open(path)
            .map_err(|e| decode_failed(ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_failed(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_failed)
    }

    fn resize(&self, image: &DynamicImage, plan: &ResizePlan) -> DynamicImage {
        let Dimensions { width, height } = plan.target;
        match plan.mode {
            ResizeMode::Fit => image.resize(width, height, FilterType::Lanczos3),
            ResizeMode::Exact | ResizeMode::WidthAnchored | ResizeMode::HeightAnchored => {
                image.resize_exact(width, height, FilterType::Lanczos3)
            }
        }
    }

    fn encode(&self, image: &DynamicImage, path: &Path, format: EncodeFormat) -> Result<()> {
        let encode_failed = |source: ImageError| ResizeError::EncodeFailed {
            path: path.to_path_buf(),
            source,
        };

        match format {
            EncodeFormat::Jpeg { quality } => {
                let file = File::create(path).map_err(|e| encode_failed(ImageError::IoError(e)))?;
                let mut writer = BufWriter::new(file);
                let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
                DynamicImage::ImageRgb8(image.to_rgb8())
                    .write_with_encoder(encoder)
                    .map_err(encode_failed)?;
                writer.flush().map_err(|e| encode_failed(ImageError::IoError(e)))
            }
            EncodeFormat::Gif => DynamicImage::ImageRgba8(image.to_rgba8())
                .save_with_format(path, format.to_image_format())
                .map_err(encode_failed),
            EncodeFormat::Tiff | EncodeFormat::Bmp => {
                let normalized = if image.color().has_alpha() {
                    DynamicImage::ImageRgba8(image.to_rgba8())
                } else {
                    DynamicImage::ImageRgb8(image.to_rgb8())
                };
                normalized
                    .save_with_format(path, format.to_image_format())
                    .map_err(encode_failed)
            }
            EncodeFormat::Png => image
                .save_with_format(path, format.to_image_format())
                .map_err(encode_failed),
        }
    }
}

/// Result of one successfully resized file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original: Dimensions,
    pub resized: Dimensions,
    /// Size of the input before it was (possibly) overwritten
    pub input_bytes: Option<u64>,
    pub output_bytes: Option<u64>,
}

/// Per-file pipeline: decode -> plan -> resize -> output path -> ensure
/// directory -> encode.
///
/// # Arguments
/// * `input_path` - Image to resize
/// * `request` - Run-wide settings
/// * `codec` - Decode/resize/encode implementation
///
/// # Returns
/// * `Ok(ResizeReport)` - Sizes and paths of the written image
/// * `Err(ResizeError)` - One of the file-scoped error kinds
pub fn process_file<C: ImageCodec + ?Sized>(
    input_path: &Path,
    request: &ResizeRequest,
    codec: &C,
) -> Result<ResizeReport> {
    debug!("Processing: {}", input_path.display());
    if request.overwrite {
        debug!("Will overwrite original file {}", input_path.display());
    }

    let source = codec.decode(input_path)?;
    let original = Dimensions::new(source.width(), source.height());
    debug!("Original size: {}", original);

    let resize_plan = plan(original, request);
    debug!("Target size: {} ({:?})", resize_plan.target, resize_plan.mode);

    let resized = codec.resize(&source, &resize_plan);
    drop(source);
    let actual = Dimensions::new(resized.width(), resized.height());

    let output = output_path(input_path, request.output_dir(), request.overwrite, actual);
    ensure_parent_dir(&output)?;

    let format = EncodeFormat::for_input(input_path, request.quality)?;
    let input_bytes = file_size(input_path);
    codec.encode(&resized, &output, format)?;
    debug!("Saved {} as {}", output.display(), format);

    Ok(ResizeReport {
        input: input_path.to_path_buf(),
        output_bytes: file_size(&output),
        output,
        original,
        resized: actual,
        input_bytes,
    })
}

/// Creates the destination directory; succeeds if it already exists, which
/// happens routinely when several workers share an output directory.
fn ensure_parent_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| ResizeError::OutputDirCreateFailed {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

fn file_size(path: &Path) -> Option<u64> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.len()),
        Err(e) => {
            warn!("Failed to get file info for {}: {}", path.display(), e);
            None
        }
    }
}
