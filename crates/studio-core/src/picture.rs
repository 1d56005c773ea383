//! Image decode and preview sizing for the captioning flow.
//!
//! The uploaded bytes are decoded once, on the explicit user trigger. The
//! display copy is forced to a fixed 800×500 box — aspect ratio is not
//! preserved. The vision model always receives the original bytes, never
//! the preview.

use image::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat};
use studio_types::{Result, StudioError};

use crate::ports::ImagePayload;

pub const PREVIEW_WIDTH: u32 = 800;
pub const PREVIEW_HEIGHT: u32 = 500;

/// A decoded upload: the original payload plus its pixel data.
pub struct Picture {
    payload: ImagePayload,
    decoded: DynamicImage,
}

/// Raw RGBA pixels for the UI to turn into a texture.
/// Kept egui-free so the core stays platform-independent.
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Decode uploaded bytes. Only PNG and JPEG are accepted.
pub fn decode(bytes: &[u8]) -> Result<Picture> {
    let format = image::guess_format(bytes)
        .map_err(|e| StudioError::Image(format!("unrecognized image data: {}", e)))?;

    let mime = match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        other => {
            return Err(StudioError::Image(format!(
                "unsupported format {:?}: upload a JPEG or PNG",
                other
            )))
        }
    };

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| StudioError::Image(e.to_string()))?;

    Ok(Picture {
        payload: ImagePayload {
            mime: mime.to_string(),
            bytes: bytes.to_vec(),
        },
        decoded,
    })
}

impl Picture {
    /// Dimensions of the original image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.decoded.dimensions()
    }

    /// The original bytes and mime type, for the service round-trip.
    pub fn payload(&self) -> &ImagePayload {
        &self.payload
    }

    /// Display copy, exactly 800×500.
    pub fn preview(&self) -> PreviewImage {
        let resized =
            self.decoded
                .resize_exact(PREVIEW_WIDTH, PREVIEW_HEIGHT, FilterType::Triangle);
        PreviewImage {
            width: PREVIEW_WIDTH as usize,
            height: PREVIEW_HEIGHT as usize,
            rgba: resized.to_rgba8().into_raw(),
        }
    }
}
