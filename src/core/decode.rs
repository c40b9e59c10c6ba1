// src/core/decode.rs
use super::error::Result;

/// Strict UTF-8 decode. Takes ownership so valid input is not copied.
/// Invalid input is an error; nothing is replaced or cut off.
pub fn decode_utf8(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}
