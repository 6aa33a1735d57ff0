//! The four image transformation operations: crop, convert, resize, pad.
//!
//! Each operation is stateless and independent: it takes a loaded
//! [`SourceImage`], performs one drawing/re-encoding step, and returns the
//! result. Crop, convert, and pad produce a [`ProcessedImage`] whose bitmap
//! is the re-decoded encoding (the handle a host would get from loading the
//! produced file); resize returns a resampled bitmap without re-encoding.
//!
//! The optional download side effect goes through the [`FileSaver`]
//! capability; resize has no download path.

mod convert;
mod crop;
mod pad;
mod resize;

pub use convert::convert;
pub use crop::{crop, crop_region, CropRegion};
pub use pad::{pad, pad_surface};
pub use resize::{resize, scaled_dimensions, Dimension};

use thiserror::Error;

use crate::decode::{self, DecodeError, DecodedImage};
use crate::encode::{self, EncodeError, OutputFormat};
use crate::save::{FileSaver, SaveError};

/// Errors from the transformation operations.
#[derive(Debug, Error)]
pub enum OpError {
    /// The source (or the freshly encoded result) failed to load.
    #[error("load failed: {0}")]
    Load(#[from] DecodeError),

    /// Encoding the result surface failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The injected saver failed to persist the result.
    #[error(transparent)]
    Save(#[from] SaveError),

    /// A parameter was outside the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// The result of a surface-producing operation (crop, convert, pad).
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// The result bitmap, decoded back from `bytes`.
    pub image: DecodedImage,
    /// The encoded result.
    pub bytes: Vec<u8>,
    /// The container `bytes` were encoded into.
    pub format: OutputFormat,
    /// Download filename (`name.extension`).
    pub filename: String,
}

impl ProcessedImage {
    /// MIME designation of the encoded bytes.
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    /// Render the encoded bytes as a base64 data URL.
    pub fn data_url(&self) -> String {
        encode::data_url(self.format, &self.bytes)
    }
}

/// Shared tail of crop/convert/pad: encode the surface, decode the result
/// handle back from the encoding, and run the optional download.
pub(crate) fn finish_surface(
    surface: &DecodedImage,
    format: OutputFormat,
    filename: String,
    auto_download: bool,
    saver: &dyn FileSaver,
) -> Result<ProcessedImage, OpError> {
    let bytes = encode::encode(surface, format)?;
    let image = decode::load_from_bytes(&bytes)?;
    if auto_download {
        saver.save(&bytes, format.mime(), &filename)?;
    }
    Ok(ProcessedImage {
        image,
        bytes,
        format,
        filename,
    })
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::decode::{DecodedImage, SourceImage};
    use crate::encode::{encode, OutputFormat};

    /// Build a test bitmap where each pixel encodes its position.
    pub fn position_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    /// Wrap a bitmap as a loaded PNG source under the given locator.
    pub fn png_source(locator: &str, image: &DecodedImage) -> SourceImage {
        let bytes = encode(image, OutputFormat::Png).unwrap();
        SourceImage::from_bytes(locator, bytes).unwrap()
    }
}
