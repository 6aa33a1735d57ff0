//! Output format registry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested extension does not map to an encodable format.
    /// There is no silent fallback to PNG.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the image dimensions.
    #[error("invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The underlying encoder failed.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}

/// An encodable output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    WebP,
}

impl OutputFormat {
    /// Resolve a bare extension string (case-insensitive, `jpg`/`jpeg`
    /// both accepted) to a format.
    ///
    /// # Errors
    ///
    /// [`EncodeError::UnsupportedFormat`] for anything unrecognized.
    pub fn from_extension(extension: &str) -> Result<Self, EncodeError> {
        match extension.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "gif" => Ok(Self::Gif),
            "bmp" => Ok(Self::Bmp),
            "webp" => Ok(Self::WebP),
            other => Err(EncodeError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::WebP => "webp",
        }
    }

    /// MIME designation of the encoded bytes.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::WebP => "image/webp",
        }
    }

    /// Whether the container carries an alpha channel. Encoding to a format
    /// without one composites the bitmap onto opaque white first.
    pub fn supports_alpha(self) -> bool {
        matches!(self, Self::Png | Self::WebP)
    }

    /// Convert to the image crate's format identifier.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Gif => image::ImageFormat::Gif,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::WebP => image::ImageFormat::WebP,
        }
    }
}
