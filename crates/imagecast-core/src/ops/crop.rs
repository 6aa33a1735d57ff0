//! Rectangular cropping.
//!
//! The crop region is given in source pixel coordinates with the origin at
//! the top-left corner. The destination surface has exactly the requested
//! dimensions; any part of the region outside the source contributes
//! nothing and stays transparent (drawImage semantics), so a partially
//! out-of-bounds crop degrades gracefully instead of failing.

use serde::{Deserialize, Serialize};

use super::{finish_surface, OpError, ProcessedImage};
use crate::decode::{DecodedImage, SourceImage};
use crate::encode::OutputFormat;
use crate::save::FileSaver;
use crate::CropOptions;

/// A crop rectangle in source pixel coordinates.
///
/// The origin may be negative or beyond the source bounds; only the
/// intersection with the source is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Crop a loaded source and re-encode the result in the source's own
/// format.
///
/// The result bitmap is the re-decoded encoding. With `auto_download`, the
/// encoded bytes are saved as `name.extension` through the injected saver.
///
/// # Errors
///
/// Rejects zero target dimensions as invalid arguments; forwards encode,
/// re-decode, and save failures.
pub fn crop(
    src: &SourceImage,
    region: CropRegion,
    options: &CropOptions,
    saver: &dyn FileSaver,
) -> Result<ProcessedImage, OpError> {
    if region.width == 0 || region.height == 0 {
        return Err(OpError::InvalidArgument(format!(
            "crop dimensions must be non-zero, got {}x{}",
            region.width, region.height
        )));
    }

    let format = OutputFormat::from_extension(&src.info.extension)?;
    let surface = crop_region(&src.image, &region);
    finish_surface(
        &surface,
        format,
        src.info.download_name(&src.info.extension),
        options.auto_download,
        saver,
    )
}

/// Copy a region of a bitmap onto a fresh transparent surface of the
/// region's size.
pub fn crop_region(image: &DecodedImage, region: &CropRegion) -> DecodedImage {
    let mut out = DecodedImage::blank(region.width, region.height);

    let src_w = i64::from(image.width);
    let src_h = i64::from(image.height);

    // Intersection of the region with the source bounds
    let sx0 = region.x.max(0);
    let sy0 = region.y.max(0);
    let sx1 = (region.x + i64::from(region.width)).min(src_w);
    let sy1 = (region.y + i64::from(region.height)).min(src_h);
    if sx0 >= sx1 || sy0 >= sy1 {
        return out;
    }

    let run = ((sx1 - sx0) * 4) as usize;
    let out_width = region.width as usize;
    for sy in sy0..sy1 {
        let dy = (sy - region.y) as usize;
        let dx = (sx0 - region.x) as usize;
        let src_start = ((sy * src_w + sx0) * 4) as usize;
        let dst_start = (dy * out_width + dx) * 4;
        out.pixels[dst_start..dst_start + run]
            .copy_from_slice(&image.pixels[src_start..src_start + run]);
    }
    out
}
