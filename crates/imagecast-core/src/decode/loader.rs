//! Decoding source bytes and data URIs into bitmaps.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageError;

use super::{DecodeError, DecodedImage};
use crate::naming::{extract_file_info, FileInfo};

/// A loaded source: its file descriptor, decoded bitmap, and the original
/// encoded bytes (kept so a format-matching convert can return the source
/// unchanged).
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub info: FileInfo,
    pub image: DecodedImage,
    pub bytes: Vec<u8>,
}

impl SourceImage {
    /// Load a source from its locator string and raw encoded bytes.
    ///
    /// The locator only feeds the file descriptor; the actual format is
    /// sniffed from the bytes. Data-URI locators get their descriptor from
    /// the URI's media type instead of the (meaningless) path parse.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes cannot be decoded.
    pub fn from_bytes(locator: &str, bytes: Vec<u8>) -> Result<Self, DecodeError> {
        let image = load_from_bytes(&bytes)?;
        let info = if locator.starts_with("data:") {
            let media_type = data_uri_media_type(locator);
            file_info_from_media_type(&media_type)
        } else {
            extract_file_info(locator)
        };
        Ok(Self { info, image, bytes })
    }

    /// Load a source directly from a base64 data URI.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the URI is malformed or the payload
    /// cannot be decoded as an image.
    pub fn from_data_uri(uri: &str) -> Result<Self, DecodeError> {
        let (media_type, bytes) = decode_data_uri(uri)?;
        let image = load_from_bytes(&bytes)?;
        Ok(Self {
            info: file_info_from_media_type(&media_type),
            image,
            bytes,
        })
    }

    /// Width of the decoded bitmap in pixels.
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Height of the decoded bitmap in pixels.
    pub fn height(&self) -> u32 {
        self.image.height
    }
}

/// Decode encoded image bytes into an RGBA bitmap.
///
/// The format is sniffed from the byte stream, so the caller does not need
/// to know the container ahead of time.
///
/// # Errors
///
/// [`DecodeError::InvalidFormat`] if the format is not recognized,
/// [`DecodeError::CorruptedData`] with the decoder's message otherwise.
pub fn load_from_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let dynamic = image::load_from_memory(bytes).map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedData(other.to_string()),
    })?;
    Ok(DecodedImage::from_rgba_image(dynamic.to_rgba8()))
}

/// Split a data URI into its media type and decoded payload bytes.
///
/// Only base64 payloads are supported; image data URIs are base64 in
/// practice, and accepting percent-encoded text here would only mask caller
/// bugs. A URI without an explicit media type yields
/// `"application/octet-stream"`.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidDataUri`] for a missing `data:` scheme,
/// a missing `,` separator, a non-base64 payload, or invalid base64.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), DecodeError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| DecodeError::InvalidDataUri("missing data: scheme".to_string()))?;
    let (metadata, payload) = rest
        .split_once(',')
        .ok_or_else(|| DecodeError::InvalidDataUri("missing ',' separator".to_string()))?;

    let metadata = match metadata.strip_suffix(";base64") {
        Some(m) => m,
        None => {
            return Err(DecodeError::InvalidDataUri(
                "only base64 payloads are supported".to_string(),
            ))
        }
    };

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| DecodeError::InvalidDataUri(e.to_string()))?;

    let media_type = metadata
        .split(';')
        .next()
        .filter(|m| !m.is_empty())
        .unwrap_or("application/octet-stream")
        .to_string();

    Ok((media_type, bytes))
}

fn data_uri_media_type(uri: &str) -> String {
    uri.strip_prefix("data:")
        .and_then(|rest| rest.split(',').next())
        .map(|metadata| metadata.split(';').next().unwrap_or(""))
        .filter(|m| !m.is_empty())
        .unwrap_or("application/octet-stream")
        .to_string()
}

/// Derive a file descriptor from a data URI's media type: the subtype
/// becomes the extension, and the name falls back to a fixed stem since a
/// data URI carries none.
fn file_info_from_media_type(media_type: &str) -> FileInfo {
    let extension = media_type
        .rsplit('/')
        .next()
        .unwrap_or(media_type)
        .to_string();
    FileInfo {
        name: "image".to_string(),
        extension,
    }
}
