//! Image loading for Imagecast.
//!
//! This module turns source bytes (or data URIs) into in-memory RGBA
//! bitmaps. Format detection is delegated to the `image` crate, so any
//! format it can sniff and decode is accepted as input regardless of the
//! locator's extension.
//!
//! All operations are synchronous; when used from WASM, the host performs
//! the asynchronous fetch and hands the bytes to [`SourceImage::from_bytes`].

mod loader;
mod types;

pub use loader::{decode_data_uri, load_from_bytes, SourceImage};
pub use types::{DecodeError, DecodedImage};
