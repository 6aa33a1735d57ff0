//! Dimension-driven resizing.
//!
//! One dimension is pinned to the requested size; the other follows the
//! source's simplified aspect ratio (the default) or stays unchanged. The
//! bitmap is resampled, not re-encoded, and there is no download path for
//! this operation.

use serde::{Deserialize, Serialize};

use super::OpError;
use crate::decode::{DecodeError, DecodedImage, SourceImage};
use crate::ratio::{AspectRatio, RatioError};
use crate::ResizeOptions;

/// Which dimension the requested size applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}

/// Resize a loaded source so the selected dimension equals `size`.
///
/// With `preserve_aspect_ratio` (the default), the other dimension is
/// scaled through the simplified ratio and rounded to the nearest integer;
/// otherwise it keeps its source value. Returns the resampled bitmap.
///
/// # Errors
///
/// Rejects `size == 0` as an invalid argument; an empty source surfaces as
/// an invalid argument as well (a ratio is undefined for it).
pub fn resize(
    src: &SourceImage,
    dimension: Dimension,
    size: u32,
    options: &ResizeOptions,
) -> Result<DecodedImage, OpError> {
    if size == 0 {
        return Err(OpError::InvalidArgument(
            "resize target size must be non-zero".to_string(),
        ));
    }

    let (width, height) = scaled_dimensions(
        src.width(),
        src.height(),
        dimension,
        size,
        options.preserve_aspect_ratio,
    )
    .map_err(|e: RatioError| OpError::InvalidArgument(e.to_string()))?;

    // Fast path: nothing to resample
    if width == src.width() && height == src.height() {
        return Ok(src.image.clone());
    }

    let rgba = src.image.to_rgba_image().ok_or_else(|| {
        OpError::Load(DecodeError::CorruptedData(
            "pixel buffer does not match dimensions".to_string(),
        ))
    })?;
    let resized = image::imageops::resize(&rgba, width, height, options.filter.to_image_filter());
    Ok(DecodedImage::from_rgba_image(resized))
}

/// Compute the output dimensions for a resize.
///
/// The unselected dimension is
/// `round(other_ratio_component / selected_ratio_component * size)`,
/// clamped to at least 1, when preserving the aspect ratio; otherwise it is
/// the source's value.
///
/// # Errors
///
/// Returns [`RatioError::ZeroDimension`] when the source has a zero
/// dimension.
pub fn scaled_dimensions(
    width: u32,
    height: u32,
    dimension: Dimension,
    size: u32,
    preserve_aspect_ratio: bool,
) -> Result<(u32, u32), RatioError> {
    let ratio = AspectRatio::of(width, height)?;
    let scaled = |other: u32, selected: u32| {
        let exact = f64::from(other) / f64::from(selected) * f64::from(size);
        (exact.round() as u32).max(1)
    };

    Ok(match dimension {
        Dimension::Width => {
            let h = if preserve_aspect_ratio {
                scaled(ratio.denominator, ratio.numerator)
            } else {
                height
            };
            (size, h)
        }
        Dimension::Height => {
            let w = if preserve_aspect_ratio {
                scaled(ratio.numerator, ratio.denominator)
            } else {
                width
            };
            (w, size)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_util::{png_source, position_image};

    #[test]
    fn test_scaled_dimensions_width_preserving() {
        assert_eq!(
            scaled_dimensions(100, 50, Dimension::Width, 200, true).unwrap(),
            (200, 100)
        );
    }

    #[test]
    fn test_scaled_dimensions_height_preserving() {
        assert_eq!(
            scaled_dimensions(100, 50, Dimension::Height, 25, true).unwrap(),
            (50, 25)
        );
    }

    #[test]
    fn test_scaled_dimensions_rounding() {
        // 3:2 ratio, width 100 -> height 66.67 rounds to 67
        assert_eq!(
            scaled_dimensions(300, 200, Dimension::Width, 100, true).unwrap(),
            (100, 67)
        );
    }

    #[test]
    fn test_scaled_dimensions_without_preserving() {
        assert_eq!(
            scaled_dimensions(100, 50, Dimension::Width, 200, false).unwrap(),
            (200, 50)
        );
        assert_eq!(
            scaled_dimensions(100, 50, Dimension::Height, 200, false).unwrap(),
            (100, 200)
        );
    }

    #[test]
    fn test_scaled_dimensions_extreme_ratio_clamps_to_one() {
        // 1000:1 source shrunk to width 1: height rounds to 0, clamped
        assert_eq!(
            scaled_dimensions(1000, 1, Dimension::Width, 1, true).unwrap(),
            (1, 1)
        );
    }

    #[test]
    fn test_scaled_dimensions_zero_source_dimension() {
        assert!(scaled_dimensions(0, 50, Dimension::Width, 10, true).is_err());
    }

    #[test]
    fn test_resize_width_preserving_ratio() {
        let img = position_image(100, 50);
        let src = png_source("img.png", &img);

        let result = resize(&src, Dimension::Width, 200, &ResizeOptions::default()).unwrap();
        assert_eq!(result.width, 200);
        assert_eq!(result.height, 100);
    }

    #[test]
    fn test_resize_same_size_fast_path() {
        let img = position_image(40, 20);
        let src = png_source("img.png", &img);

        let result = resize(&src, Dimension::Width, 40, &ResizeOptions::default()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_resize_zero_size_rejected() {
        let img = position_image(10, 10);
        let src = png_source("img.png", &img);

        let err = resize(&src, Dimension::Height, 0, &ResizeOptions::default()).unwrap_err();
        assert!(matches!(err, OpError::InvalidArgument(_)));
    }

    #[test]
    fn test_resize_nearest_filter_solid_color() {
        let mut img = position_image(10, 10);
        img.pixels.iter_mut().for_each(|b| *b = 128);
        let src = png_source("img.png", &img);
        let options = ResizeOptions {
            filter: crate::FilterType::Nearest,
            ..ResizeOptions::default()
        };

        let result = resize(&src, Dimension::Width, 5, &options).unwrap();
        assert_eq!(result.width, 5);
        assert_eq!(result.height, 5);
        assert_eq!(result.pixel(2, 2), [128, 128, 128, 128]);
    }
}
