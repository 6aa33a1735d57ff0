//! File descriptor extraction from source locators.
//!
//! A source locator is any string identifying an image: a URL, a relative
//! path, or a data URI. The descriptor derived from it names downloaded
//! output and carries the source's original extension for re-encoding.

use serde::{Deserialize, Serialize};

/// The `{name, extension}` pair parsed from a source locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Base name without directory or extension.
    pub name: String,
    /// Substring after the last `.`, without the dot.
    pub extension: String,
}

impl FileInfo {
    /// Build the download filename for a given target extension.
    pub fn download_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }
}

/// Parse a source locator into its `{name, extension}` descriptor.
///
/// The extension is the substring after the last `.`; the name is the
/// substring between the character after the last `/` (or the start of the
/// string) and that `.`. No validation is performed: a locator without a
/// `.` yields the whole string as the extension and an empty name, and
/// other malformed inputs produce similarly degenerate descriptors rather
/// than errors.
///
/// ```ignore
/// assert_eq!(
///     extract_file_info("photos/cat.png"),
///     FileInfo { name: "cat".into(), extension: "png".into() }
/// );
/// ```
pub fn extract_file_info(locator: &str) -> FileInfo {
    let name_start = locator.rfind('/').map_or(0, |i| i + 1);
    match locator.rfind('.') {
        Some(dot) => {
            let name = if dot >= name_start {
                &locator[name_start..dot]
            } else {
                // Dot belongs to a directory component, e.g. "v1.2/img"
                ""
            };
            FileInfo {
                name: name.to_string(),
                extension: locator[dot + 1..].to_string(),
            }
        }
        None => FileInfo {
            name: String::new(),
            extension: locator.to_string(),
        },
    }
}
