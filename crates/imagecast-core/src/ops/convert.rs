//! Format conversion.
//!
//! Re-encodes a source into a different container. Targets without alpha
//! support (jpg, gif, bmp) have transparency composited onto opaque white
//! by the encoder, so a transparent source converts to white, not black.

use super::{finish_surface, OpError, ProcessedImage};
use crate::decode::SourceImage;
use crate::encode::OutputFormat;
use crate::save::FileSaver;
use crate::ConvertOptions;

/// Convert a loaded source to the target format (a bare extension string,
/// e.g. `"jpg"`).
///
/// When the target string matches the source's extension
/// (ASCII-case-insensitively), the operation resolves to the source
/// unchanged: original bitmap, original bytes, and no download. Note the
/// comparison is on the extension strings, so `"jpeg"` against a `.jpg`
/// source is a real re-encode.
///
/// With `auto_download`, the result is saved as `name.<target>`.
///
/// # Errors
///
/// Rejects unrecognized target formats; forwards encode, re-decode, and
/// save failures.
pub fn convert(
    src: &SourceImage,
    target: &str,
    options: &ConvertOptions,
    saver: &dyn FileSaver,
) -> Result<ProcessedImage, OpError> {
    let format = OutputFormat::from_extension(target)?;
    let target = target.trim().to_ascii_lowercase();

    if target.eq_ignore_ascii_case(src.info.extension.trim()) {
        return Ok(ProcessedImage {
            image: src.image.clone(),
            bytes: src.bytes.clone(),
            format,
            filename: src.info.download_name(&target),
        });
    }

    finish_surface(
        &src.image,
        format,
        src.info.download_name(&target),
        options.auto_download,
        saver,
    )
}
