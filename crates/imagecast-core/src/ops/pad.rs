//! Uniform padding.
//!
//! Expands the surface by `padding` pixels on every side and draws the
//! source centered in it. The border is the padding color, or transparent
//! when none is given. Centering uses the general `out/2 - src/2` formula,
//! which reduces to exactly `padding` for the uniform case.

use super::{finish_surface, OpError, ProcessedImage};
use crate::decode::{DecodedImage, SourceImage};
use crate::encode::OutputFormat;
use crate::save::FileSaver;
use crate::{PadOptions, Rgba};

/// Pad a loaded source and re-encode it in its own format.
///
/// With `auto_download`, the result is saved as `name.extension`.
///
/// # Errors
///
/// Forwards encode, re-decode, and save failures; fails when the source's
/// extension is not an encodable format.
pub fn pad(
    src: &SourceImage,
    padding: u32,
    options: &PadOptions,
    saver: &dyn FileSaver,
) -> Result<ProcessedImage, OpError> {
    let format = OutputFormat::from_extension(&src.info.extension)?;
    let surface = pad_surface(&src.image, padding, options.padding_color);
    finish_surface(
        &surface,
        format,
        src.info.download_name(&src.info.extension),
        options.auto_download,
        saver,
    )
}

/// Draw a bitmap centered on a surface grown by `padding` on each side,
/// over the given fill color (or transparency).
pub fn pad_surface(image: &DecodedImage, padding: u32, color: Option<Rgba>) -> DecodedImage {
    let out_w = image.width + 2 * padding;
    let out_h = image.height + 2 * padding;

    let mut out = match color {
        Some(c) => {
            let mut pixels = Vec::with_capacity((out_w as usize) * (out_h as usize) * 4);
            for _ in 0..out_w * out_h {
                pixels.extend_from_slice(&[c.r, c.g, c.b, c.a]);
            }
            DecodedImage::new(out_w, out_h, pixels)
        }
        None => DecodedImage::blank(out_w, out_h),
    };

    // General centering formula; equals `padding` for uniform expansion
    let ox = (out_w / 2 - image.width / 2) as usize;
    let oy = (out_h / 2 - image.height / 2) as usize;
    let out_width = out_w as usize;

    for y in 0..image.height as usize {
        for x in 0..image.width as usize {
            let src_idx = (y * image.width as usize + x) * 4;
            let dst_idx = ((oy + y) * out_width + (ox + x)) * 4;
            let src_px = [
                image.pixels[src_idx],
                image.pixels[src_idx + 1],
                image.pixels[src_idx + 2],
                image.pixels[src_idx + 3],
            ];
            let dst_px = [
                out.pixels[dst_idx],
                out.pixels[dst_idx + 1],
                out.pixels[dst_idx + 2],
                out.pixels[dst_idx + 3],
            ];
            out.pixels[dst_idx..dst_idx + 4].copy_from_slice(&composite_over(src_px, dst_px));
        }
    }
    out
}

/// Standard source-over compositing of straight-alpha RGBA pixels.
fn composite_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    if src[3] == 255 {
        return src;
    }
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa == 0.0 {
        return [0, 0, 0, 0];
    }
    let mut out = [0u8; 4];
    for i in 0..3 {
        let blended =
            (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / oa;
        out[i] = blended.round() as u8;
    }
    out[3] = (oa * 255.0).round() as u8;
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_util::{png_source, position_image};
    use crate::save::{MemorySaver, NullSaver};

    #[test]
    fn test_pad_surface_dimensions_and_centering() {
        let img = position_image(100, 100);
        let result = pad_surface(&img, 10, None);

        assert_eq!(result.width, 120);
        assert_eq!(result.height, 120);
        // Source lands at offset (10, 10)
        assert_eq!(result.pixel(10, 10), img.pixel(0, 0));
        assert_eq!(result.pixel(109, 109), img.pixel(99, 99));
        // Border stays transparent
        assert_eq!(result.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(result.pixel(119, 119), [0, 0, 0, 0]);
        assert_eq!(result.pixel(9, 60), [0, 0, 0, 0]);
    }

    #[test]
    fn test_pad_surface_with_color() {
        let img = position_image(4, 4);
        let result = pad_surface(&img, 2, Some(Rgba::opaque(10, 20, 30)));

        assert_eq!(result.width, 8);
        assert_eq!(result.pixel(0, 0), [10, 20, 30, 255]);
        assert_eq!(result.pixel(7, 7), [10, 20, 30, 255]);
        // Opaque source pixels replace the fill
        assert_eq!(result.pixel(2, 2), img.pixel(0, 0));
    }

    #[test]
    fn test_pad_surface_zero_padding_identity() {
        let img = position_image(7, 5);
        let result = pad_surface(&img, 0, None);
        assert_eq!(result, img);
    }

    #[test]
    fn test_pad_surface_composites_transparency_over_fill() {
        // Half-transparent red over an opaque white fill
        let img = DecodedImage::new(1, 1, vec![255, 0, 0, 128]);
        let result = pad_surface(&img, 1, Some(Rgba::WHITE));

        let [r, g, b, a] = result.pixel(1, 1);
        assert_eq!(r, 255);
        assert!((125..=130).contains(&g));
        assert!((125..=130).contains(&b));
        assert_eq!(a, 255);
    }

    #[test]
    fn test_pad_surface_odd_dimensions_center() {
        let img = position_image(5, 5);
        let result = pad_surface(&img, 3, None);

        assert_eq!(result.width, 11);
        // 11/2 - 5/2 = 5 - 2 = 3: the general formula gives the padding
        assert_eq!(result.pixel(3, 3), img.pixel(0, 0));
        assert_eq!(result.pixel(7, 7), img.pixel(4, 4));
    }

    #[test]
    fn test_pad_operation_end_to_end() {
        let img = position_image(100, 100);
        let src = png_source("art/tile.png", &img);

        let result = pad(&src, 10, &PadOptions::default(), &NullSaver).unwrap();

        assert_eq!(result.image.width, 120);
        assert_eq!(result.image.height, 120);
        assert_eq!(result.format, OutputFormat::Png);
        assert_eq!(result.filename, "tile.png");
        // PNG round trip is exact: centered content and transparent border
        assert_eq!(result.image.pixel(10, 10), img.pixel(0, 0));
        assert_eq!(result.image.pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_pad_auto_download() {
        let img = position_image(10, 10);
        let src = png_source("img.png", &img);
        let saver = MemorySaver::new();
        let options = PadOptions {
            auto_download: true,
            ..PadOptions::default()
        };

        let result = pad(&src, 5, &options, &saver).unwrap();

        let files = saver.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "img.png");
        assert_eq!(files[0].bytes, result.bytes);
    }

    #[test]
    fn test_composite_over_transparent_background_keeps_source() {
        let src = [40, 50, 60, 70];
        assert_eq!(composite_over(src, [0, 0, 0, 0]), src);
    }
}
