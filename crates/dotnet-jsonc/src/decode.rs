//! Decode helpers composing the lexical pre-pass with `serde_json`

use serde::de::DeserializeOwned;

use crate::strip::{strip_comments, strip_trailing_commas};

/// Decode `source` after removing comments and trailing commas.
pub fn from_str<T>(source: &str) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    let stripped = strip_trailing_commas(&strip_comments(source));
    serde_json::from_str(&stripped)
}

/// Decode raw bytes after removing comments and trailing commas.
///
/// Non-UTF-8 input is a decode error, not an I/O error.
pub fn from_slice<T>(bytes: &[u8]) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    match std::str::from_utf8(bytes) {
        Ok(source) => from_str(source),
        // Not UTF-8: hand the bytes to serde_json so the failure surfaces
        // as its decode error.
        Err(_) => serde_json::from_slice(bytes),
    }
}
