//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Imagecast types, handling the conversion between Rust and JavaScript
//! data representations.

use imagecast_core::decode::DecodedImage;
use imagecast_core::encode::data_url_for_mime;
use imagecast_core::ops::ProcessedImage;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// Pixel data is RGBA, row-major, 4 bytes per pixel, stored in WASM memory.
/// Calling `pixels()` copies it out to a `Uint8Array`; wasm-bindgen's
/// finalizer releases the WASM side automatically, or call `free()` to do
/// it eagerly.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and RGBA pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Copy the RGBA pixel data out to JavaScript
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Size of the pixel buffer in bytes
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(image: DecodedImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            pixels: image.pixels,
        }
    }

    #[allow(dead_code)] // Handy for hosts that feed bitmaps back into ops
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// The result of a surface-producing operation (crop, convert, pad).
///
/// Carries both the re-decoded bitmap (for display) and the encoded bytes
/// (for persisting), plus the MIME designation and download filename.
#[wasm_bindgen]
pub struct JsProcessedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    bytes: Vec<u8>,
    mime: String,
    filename: String,
}

#[wasm_bindgen]
impl JsProcessedImage {
    /// Result width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Result height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Copy the RGBA pixel data of the result bitmap out to JavaScript
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Copy the encoded bytes out to JavaScript
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// MIME designation of the encoded bytes (e.g. "image/png")
    #[wasm_bindgen(getter)]
    pub fn mime(&self) -> String {
        self.mime.clone()
    }

    /// Download filename built from the source descriptor
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    /// Render the encoded bytes as a base64 data URL
    pub fn data_url(&self) -> String {
        data_url_for_mime(&self.mime, &self.bytes)
    }
}

impl JsProcessedImage {
    pub(crate) fn from_processed(result: ProcessedImage) -> Self {
        Self {
            width: result.image.width,
            height: result.image.height,
            mime: result.mime().to_string(),
            pixels: result.image.pixels,
            bytes: result.bytes,
            filename: result.filename,
        }
    }
}

/// Deserialize an options object from JavaScript, treating `undefined` and
/// `null` as "use the documented defaults".
pub(crate) fn parse_options<T>(value: JsValue) -> Result<T, JsValue>
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_decoded_image_accessors() {
        let img = JsDecodedImage::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_decoded_image_round_trip() {
        let decoded = DecodedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let js_img = JsDecodedImage::from_decoded(decoded.clone());
        assert_eq!(js_img.to_decoded(), decoded);
    }

    #[test]
    fn test_js_processed_image_from_core() {
        let image = DecodedImage::new(1, 1, vec![9, 9, 9, 255]);
        let result = ProcessedImage {
            image,
            bytes: vec![1, 2, 3],
            format: imagecast_core::OutputFormat::Png,
            filename: "img.png".to_string(),
        };
        let js = JsProcessedImage::from_processed(result);
        assert_eq!(js.width(), 1);
        assert_eq!(js.mime(), "image/png");
        assert_eq!(js.filename(), "img.png");
        assert_eq!(js.data_url(), "data:image/png;base64,AQID");
    }
}
