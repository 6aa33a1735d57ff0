//! The browser download saver.
//!
//! Implements the core [`FileSaver`] capability with the classic anchor
//! trick: build a transient `<a>` element whose `href` is the result's data
//! URL, set its `download` attribute to the computed filename, click it,
//! and remove it again.

use imagecast_core::encode::data_url_for_mime;
use imagecast_core::save::{FileSaver, SaveError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A [`FileSaver`] that triggers a browser download via a synthetic anchor
/// element. Requires a DOM; construction is cheap and stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnchorSaver;

impl FileSaver for AnchorSaver {
    fn save(&self, bytes: &[u8], mime: &str, filename: &str) -> Result<(), SaveError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SaveError::Unavailable("no DOM document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| SaveError::Unavailable("document has no body".to_string()))?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| SaveError::Failed(format!("{e:?}")))?
            .dyn_into()
            .map_err(|_| SaveError::Failed("created element is not an anchor".to_string()))?;

        anchor.set_href(&data_url_for_mime(mime, bytes));
        anchor.set_download(filename);

        // The element must be in the document for click() to navigate
        body.append_child(&anchor)
            .map_err(|e| SaveError::Failed(format!("{e:?}")))?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|e| SaveError::Failed(format!("{e:?}")))?;
        Ok(())
    }
}

/// Trigger a browser download of arbitrary bytes under the given MIME type
/// and filename.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const result = convert(bytes, 'photo.png', 'jpg');
/// download_bytes(result.bytes(), result.mime, result.filename);
/// ```
#[wasm_bindgen]
pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), JsValue> {
    AnchorSaver
        .save(bytes, mime, filename)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
