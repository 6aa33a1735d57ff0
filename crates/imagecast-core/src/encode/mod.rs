//! Image encoding for Imagecast.
//!
//! Re-encoding is the tail of every surface-producing operation: the
//! transformed RGBA bitmap is written into the requested container and the
//! bytes handed back (or rendered as a base64 data URL). Formats without an
//! alpha channel get the bitmap composited onto opaque white first, so
//! transparency flattens to white rather than black.

mod format;
mod writer;

pub use format::{EncodeError, OutputFormat};
pub use writer::{data_url, data_url_for_mime, encode, flatten_onto_white};
