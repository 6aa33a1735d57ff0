//! Imagecast Core - Image transformation library
//!
//! This crate provides the core transformation functionality for Imagecast:
//! cropping, format conversion, resizing, and padding of raster images,
//! plus the small utilities (file-descriptor extraction, aspect-ratio
//! simplification) shared by the operations.
//!
//! The crate is host-independent: images come in as encoded bytes, results
//! go out as [`ops::ProcessedImage`] values, and the download side effect is
//! abstracted behind the [`save::FileSaver`] capability so the logic can be
//! exercised without a browser.

pub mod decode;
pub mod encode;
pub mod naming;
pub mod ops;
pub mod ratio;
pub mod save;

pub use decode::{DecodeError, DecodedImage, SourceImage};
pub use encode::{EncodeError, OutputFormat};
pub use naming::{extract_file_info, FileInfo};
pub use ops::{convert, crop, pad, resize, CropRegion, Dimension, OpError, ProcessedImage};
pub use ratio::{gcd, AspectRatio, RatioError};
pub use save::{FileSaver, MemorySaver, NullSaver, SaveError};

/// An RGBA color value, used for padding fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha, 255 = fully opaque
    pub a: u8,
}

impl Rgba {
    /// Create a fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque white, the composite background for alpha-less formats.
    pub const WHITE: Rgba = Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// Filter type for resize resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Options for the crop operation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropOptions {
    /// Save the result through the injected saver after encoding.
    pub auto_download: bool,
    /// Cross-origin attribute for the host's image loader; carried through
    /// so a fetching host can apply it before the load begins.
    pub cross_origin: Option<String>,
}

/// Options for the convert operation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Save the result through the injected saver after encoding.
    pub auto_download: bool,
    /// Cross-origin attribute for the host's image loader.
    pub cross_origin: Option<String>,
}

/// Options for the resize operation.
///
/// `preserve_aspect_ratio` defaults to `true`: the unselected dimension is
/// scaled through the simplified aspect ratio. When `false`, the unselected
/// dimension keeps its original value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeOptions {
    pub preserve_aspect_ratio: bool,
    /// Resampling filter (default: bilinear).
    pub filter: FilterType,
    /// Cross-origin attribute for the host's image loader.
    pub cross_origin: Option<String>,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            preserve_aspect_ratio: true,
            filter: FilterType::default(),
            cross_origin: None,
        }
    }
}

/// Options for the pad operation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PadOptions {
    /// Save the result through the injected saver after encoding.
    pub auto_download: bool,
    /// Fill color for the padded border. `None` leaves it transparent.
    pub padding_color: Option<Rgba>,
    /// Cross-origin attribute for the host's image loader.
    pub cross_origin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_options_default() {
        let opts = CropOptions::default();
        assert!(!opts.auto_download);
        assert!(opts.cross_origin.is_none());
    }

    #[test]
    fn test_resize_options_default_preserves_ratio() {
        let opts = ResizeOptions::default();
        assert!(opts.preserve_aspect_ratio);
        assert_eq!(opts.filter, FilterType::Bilinear);
    }

    #[test]
    fn test_pad_options_default_transparent() {
        let opts = PadOptions::default();
        assert!(opts.padding_color.is_none());
    }

    #[test]
    fn test_options_deserialize_missing_fields() {
        let opts: ResizeOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.preserve_aspect_ratio);

        let opts: PadOptions =
            serde_json::from_str(r#"{"paddingColor":{"r":0,"g":0,"b":0,"a":255}}"#).unwrap();
        assert_eq!(opts.padding_color, Some(Rgba::opaque(0, 0, 0)));
        assert!(!opts.auto_download);
    }

    #[test]
    fn test_filter_type_mapping() {
        assert_eq!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        );
        assert_eq!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        );
    }
}
