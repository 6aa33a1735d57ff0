//! WASM bindings for the transformation operations.
//!
//! Each binding takes the source's raw encoded bytes plus its locator
//! string (the host fetches the file, applying any `crossOrigin` attribute
//! carried in the options, and hands the bytes over), runs one operation,
//! and returns the result. Options arrive as plain JS objects; omitted
//! fields take the documented defaults.

use imagecast_core::decode::SourceImage;
use imagecast_core::ops::{self as core_ops, CropRegion, Dimension};
use imagecast_core::{ConvertOptions, CropOptions, PadOptions, ResizeOptions};
use wasm_bindgen::prelude::*;

use crate::download::AnchorSaver;
use crate::types::{parse_options, JsDecodedImage, JsProcessedImage};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn load_source(bytes: &[u8], source_name: &str) -> Result<SourceImage, JsValue> {
    SourceImage::from_bytes(source_name, bytes.to_vec()).map_err(js_err)
}

/// Crop a rectangular region out of a source image.
///
/// The region is in source pixel coordinates; parts outside the source stay
/// transparent. The result is re-encoded in the source's own format.
///
/// # Arguments
///
/// * `bytes` - The source file bytes as a `Uint8Array`
/// * `source_name` - The source locator (names the download, supplies the
///   target encoding via its extension)
/// * `x`, `y` - Crop origin, may be negative
/// * `width`, `height` - Crop dimensions in pixels, non-zero
/// * `options` - `{ autoDownload?, crossOrigin? }` or undefined
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const result = crop(bytes, 'photos/cat.png', 10, 10, 50, 50, { autoDownload: true });
/// console.log(`${result.width}x${result.height} -> ${result.filename}`);
/// ```
#[wasm_bindgen]
pub fn crop(
    bytes: &[u8],
    source_name: &str,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    options: JsValue,
) -> Result<JsProcessedImage, JsValue> {
    let options: CropOptions = parse_options(options)?;
    let src = load_source(bytes, source_name)?;
    let region = CropRegion::new(i64::from(x), i64::from(y), width, height);
    core_ops::crop(&src, region, &options, &AnchorSaver)
        .map(JsProcessedImage::from_processed)
        .map_err(js_err)
}

/// Convert a source image to another format.
///
/// `target` is a bare extension string (`"png"`, `"jpg"`/`"jpeg"`,
/// `"gif"`, `"bmp"`, `"webp"`). Converting to a format without alpha
/// support composites transparency onto opaque white. A target matching
/// the source's extension returns the source unchanged.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const result = convert(bytes, 'logo.png', 'jpg');
/// img.src = result.data_url(); // white where the PNG was transparent
/// ```
#[wasm_bindgen]
pub fn convert(
    bytes: &[u8],
    source_name: &str,
    target: &str,
    options: JsValue,
) -> Result<JsProcessedImage, JsValue> {
    let options: ConvertOptions = parse_options(options)?;
    let src = load_source(bytes, source_name)?;
    core_ops::convert(&src, target, &options, &AnchorSaver)
        .map(JsProcessedImage::from_processed)
        .map_err(js_err)
}

/// Resize a source image by pinning one dimension.
///
/// `dimension` is `"width"` or `"height"`. With `preserveAspectRatio`
/// (the default) the other dimension follows the source's simplified
/// aspect ratio. Returns the resampled bitmap; resize does not re-encode
/// and has no download path.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const resized = resize(bytes, 'photo.jpg', 'width', 200);
/// console.log(`${resized.width}x${resized.height}`); // 200x100 for a 100x50 source
/// ```
#[wasm_bindgen]
pub fn resize(
    bytes: &[u8],
    source_name: &str,
    dimension: &str,
    size: u32,
    options: JsValue,
) -> Result<JsDecodedImage, JsValue> {
    let options: ResizeOptions = parse_options(options)?;
    let dimension = parse_dimension(dimension).map_err(js_err)?;
    let src = load_source(bytes, source_name)?;
    core_ops::resize(&src, dimension, size, &options)
        .map(JsDecodedImage::from_decoded)
        .map_err(js_err)
}

/// Pad a source image uniformly on all four sides.
///
/// The surface grows by `padding` pixels per side; the border is
/// `paddingColor` (`{r, g, b, a}`) or transparent when omitted. The result
/// is re-encoded in the source's own format.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const result = pad(bytes, 'tile.png', 10, {
///   paddingColor: { r: 255, g: 255, b: 255, a: 255 },
/// });
/// ```
#[wasm_bindgen]
pub fn pad(
    bytes: &[u8],
    source_name: &str,
    padding: u32,
    options: JsValue,
) -> Result<JsProcessedImage, JsValue> {
    let options: PadOptions = parse_options(options)?;
    let src = load_source(bytes, source_name)?;
    core_ops::pad(&src, padding, &options, &AnchorSaver)
        .map(JsProcessedImage::from_processed)
        .map_err(js_err)
}

fn parse_dimension(value: &str) -> Result<Dimension, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "width" => Ok(Dimension::Width),
        "height" => Ok(Dimension::Height),
        other => Err(format!(
            "unknown dimension '{other}', expected 'width' or 'height'"
        )),
    }
}
