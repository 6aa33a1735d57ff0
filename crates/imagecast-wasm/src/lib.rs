//! Imagecast WASM - WebAssembly bindings for Imagecast
//!
//! This crate exposes the imagecast-core transformations to
//! JavaScript/TypeScript applications running in a browser.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `ops` - The four operations: crop, convert, resize, pad
//! - `download` - Anchor-element download of operation results
//!
//! # Usage
//!
//! ```typescript
//! import init, { crop, convert, resize, pad } from '@imagecast/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // The host loads the source (applying options.crossOrigin to its
//! // fetch) and hands the bytes to the operation.
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = crop(bytes, file.name, 10, 10, 50, 50, { autoDownload: true });
//! preview.src = result.data_url();
//! ```

use wasm_bindgen::prelude::*;

mod download;
mod ops;
mod types;

// Re-export public types
pub use download::{download_bytes, AnchorSaver};
pub use ops::{convert, crop, pad, resize};
pub use types::{JsDecodedImage, JsProcessedImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse a source locator into its `{name, extension}` descriptor.
#[wasm_bindgen]
pub fn extract_file_info(locator: &str) -> Result<JsValue, JsValue> {
    let info = imagecast_core::extract_file_info(locator);
    serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Simplify a width/height pair to its lowest-terms aspect ratio,
/// returned as `{numerator, denominator}`.
#[wasm_bindgen]
pub fn simplify_ratio(width: u32, height: u32) -> Result<JsValue, JsValue> {
    let ratio = imagecast_core::AspectRatio::of(width, height)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&ratio).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extensions the encoder accepts, for populating format pickers.
#[wasm_bindgen]
pub fn supported_formats() -> Vec<String> {
    vec![
        "png".to_string(),
        "jpg".to_string(),
        "jpeg".to_string(),
        "gif".to_string(),
        "bmp".to_string(),
        "webp".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_supported_formats_are_encodable() {
        for ext in supported_formats() {
            assert!(imagecast_core::OutputFormat::from_extension(&ext).is_ok());
        }
    }
}
