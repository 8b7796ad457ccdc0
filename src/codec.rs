//! Conversion between a header/param [`Mapping`] and its JSON editor text.
//!
//! Only a JSON object whose values are strings or `null` is accepted;
//! anything else is rejected whole, so callers never apply a partial decode.

use crate::error::CodecError;
use crate::models::Mapping;

/// Decodes editor text into a mapping.
pub fn decode(text: &str) -> Result<Mapping, CodecError> {
    let mapping = serde_json::from_str::<Mapping>(text)?;
    tracing::debug!(entries = mapping.len(), "Decoded mapping text");
    Ok(mapping)
}

/// Decodes raw bytes, rejecting anything that is not UTF-8 first.
pub fn decode_bytes(bytes: &[u8]) -> Result<Mapping, CodecError> {
    let text = std::str::from_utf8(bytes)?;
    decode(text)
}

/// Encodes a mapping as a compact JSON object; `None` values become `null`.
///
/// Forward slashes are written unescaped.
pub fn encode(mapping: &Mapping) -> Option<String> {
    match serde_json::to_string(mapping) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode mapping");
            None
        }
    }
}
