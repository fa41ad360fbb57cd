//! Image normalization — decode, downscale to a bounded edge, re-encode.
//!
//! Output is always JPEG at a fixed quality. Images already within bounds
//! keep their exact dimensions; nothing is ever upscaled.

use image::{imageops::FilterType, GenericImageView};
use serde::Serialize;
use tracing::debug;

use crate::classify::{classify, Classification};
use crate::descriptor::FileDescriptor;
use crate::error::FileError;

/// Maximum pixel edge of a normalized image.
pub const MAX_DIM: u32 = 2048;

/// JPEG quality factor (0.85 on the usual 0–1 scale).
const JPEG_QUALITY: u8 = 85;

/// A re-encoded, size-capped image ready for upload.
#[derive(Clone, Serialize)]
pub struct ImageArtifact {
    /// Post-scale width. `max(width, height) <= MAX_DIM`.
    pub width: u32,
    /// Post-scale height.
    pub height: u32,
    /// JPEG-encoded pixels.
    pub bytes: Vec<u8>,
    /// Always `"image/jpeg"`.
    pub mime_type: String,
    /// Encoded size in bytes.
    pub size: u64,
}

impl std::fmt::Debug for ImageArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageArtifact")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("size", &self.size)
            .finish()
    }
}

/// Normalize a user-selected image.
///
/// Fails with [`FileError::UnsupportedType`] when the declared MIME type is
/// not in the image whitelist, and with [`FileError::Decode`] when the bytes
/// are not a decodable raster image. Single-shot; no partial output.
pub async fn normalize_image(file: &FileDescriptor) -> Result<ImageArtifact, FileError> {
    if classify(file) != Classification::Image {
        return Err(FileError::unsupported(file));
    }

    let decoded = image::load_from_memory(&file.bytes)?;
    let (width, height) = decoded.dimensions();
    let (target_width, target_height) = scaled_dimensions(width, height, MAX_DIM);

    let resized = if (target_width, target_height) == (width, height) {
        decoded
    } else {
        image::DynamicImage::ImageRgba8(image::imageops::resize(
            &decoded,
            target_width,
            target_height,
            FilterType::Triangle,
        ))
    };

    // JPEG has no alpha channel; flatten before encoding.
    let rgb = resized.to_rgb8();
    let mut bytes = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;

    debug!(
        name = %file.name,
        width,
        height,
        target_width,
        target_height,
        encoded = bytes.len(),
        "image normalized"
    );

    let size = bytes.len() as u64;
    Ok(ImageArtifact {
        width: target_width,
        height: target_height,
        bytes,
        mime_type: "image/jpeg".to_string(),
        size,
    })
}

/// Downscale-only fit into `max_edge`, preserving aspect ratio with
/// round-to-nearest. Dimensions within bounds come back unchanged.
fn scaled_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width <= max_edge && height <= max_edge {
        return (width, height);
    }
    let ratio = f64::from(max_edge) / f64::from(width.max(height));
    let scaled_width = (f64::from(width) * ratio).round() as u32;
    let scaled_height = (f64::from(height) * ratio).round() as u32;
    (scaled_width.max(1), scaled_height.max(1))
}
