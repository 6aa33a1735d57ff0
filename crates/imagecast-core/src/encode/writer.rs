//! Writing bitmaps into encoded containers.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::DynamicImage;

use super::{EncodeError, OutputFormat};
use crate::decode::DecodedImage;

/// Encode an RGBA bitmap into the given format.
///
/// Formats without alpha support (jpg, gif, bmp) are composited onto
/// opaque white before encoding; png and webp keep the alpha channel.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidDimensions`] or
/// [`EncodeError::InvalidPixelData`] when the bitmap is malformed, and
/// [`EncodeError::EncodingFailed`] with the encoder's message otherwise.
pub fn encode(image: &DecodedImage, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }
    let expected = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let dynamic = if format.supports_alpha() {
        let rgba = image
            .to_rgba_image()
            .ok_or(EncodeError::InvalidPixelData {
                expected,
                actual: image.pixels.len(),
            })?;
        DynamicImage::ImageRgba8(rgba)
    } else {
        let flat = flatten_onto_white(image);
        let rgba = flat.to_rgba_image().ok_or(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        })?;
        // Alpha is uniformly 255 after flattening; drop the channel.
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8())
    };

    let mut buf = Vec::new();
    dynamic
        .write_to(&mut Cursor::new(&mut buf), format.to_image_format())
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(buf)
}

/// Composite a bitmap onto an opaque white background (source-over).
///
/// The result has every alpha value set to 255. Fully opaque inputs come
/// back unchanged apart from the copy.
pub fn flatten_onto_white(image: &DecodedImage) -> DecodedImage {
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for px in image.pixels.chunks_exact(4) {
        let a = u16::from(px[3]);
        for c in &px[..3] {
            // c' = c*a + 255*(255-a), rounded, normalized back to 0..=255
            let blended = (u16::from(*c) * a + 255 * (255 - a) + 127) / 255;
            pixels.push(blended as u8);
        }
        pixels.push(255);
    }
    DecodedImage::new(image.width, image.height, pixels)
}

/// Render encoded bytes as a base64 data URL with the format's MIME type.
pub fn data_url(format: OutputFormat, bytes: &[u8]) -> String {
    data_url_for_mime(format.mime(), bytes)
}

/// Render encoded bytes as a base64 data URL under an arbitrary MIME type.
pub fn data_url_for_mime(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::load_from_bytes;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&color);
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_encode_png_round_trips_exactly() {
        let img = solid(5, 4, [12, 34, 56, 200]);
        let bytes = encode(&img, OutputFormat::Png).unwrap();
        let back = load_from_bytes(&bytes).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_encode_jpeg_flattens_transparency_to_white() {
        let img = solid(8, 8, [0, 0, 0, 0]);
        let bytes = encode(&img, OutputFormat::Jpeg).unwrap();
        let back = load_from_bytes(&bytes).unwrap();
        assert_eq!(back.width, 8);
        let [r, g, b, a] = back.pixel(4, 4);
        assert!(r >= 250 && g >= 250 && b >= 250, "expected ~white, got {r},{g},{b}");
        assert_eq!(a, 255);
    }

    #[test]
    fn test_encode_jpeg_magic_bytes() {
        let img = solid(4, 4, [128, 128, 128, 255]);
        let bytes = encode(&img, OutputFormat::Jpeg).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_gif_and_bmp_decodable() {
        let img = solid(6, 3, [10, 200, 30, 255]);
        for format in [OutputFormat::Gif, OutputFormat::Bmp] {
            let bytes = encode(&img, format).unwrap();
            let back = load_from_bytes(&bytes).unwrap();
            assert_eq!((back.width, back.height), (6, 3));
        }
    }

    #[test]
    fn test_encode_webp_keeps_alpha() {
        let img = solid(4, 4, [50, 60, 70, 128]);
        let bytes = encode(&img, OutputFormat::WebP).unwrap();
        let back = load_from_bytes(&bytes).unwrap();
        // Lossless webp: exact round trip including alpha
        assert_eq!(back, img);
    }

    #[test]
    fn test_encode_rejects_zero_dimensions() {
        let img = DecodedImage::blank(0, 4);
        assert!(matches!(
            encode(&img, OutputFormat::Png),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_rejects_short_pixel_buffer() {
        let img = DecodedImage {
            width: 4,
            height: 4,
            pixels: vec![0u8; 10],
        };
        assert!(matches!(
            encode(&img, OutputFormat::Png),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_flatten_half_transparent_red() {
        let img = solid(1, 1, [255, 0, 0, 128]);
        let flat = flatten_onto_white(&img);
        let [r, g, b, a] = flat.pixel(0, 0);
        // 50% red over white: red stays 255, green/blue land near 127
        assert_eq!(r, 255);
        assert!((125..=130).contains(&g));
        assert!((125..=130).contains(&b));
        assert_eq!(a, 255);
    }

    #[test]
    fn test_flatten_opaque_unchanged() {
        let img = solid(2, 2, [9, 8, 7, 255]);
        assert_eq!(flatten_onto_white(&img), img);
    }

    #[test]
    fn test_data_url_shape() {
        let url = data_url(OutputFormat::Png, &[1, 2, 3]);
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(url, "data:image/png;base64,AQID");
    }
}
