//! # Fixed-Width Text Helpers
//!
//! Character data in a table file is right-padded. Names are padded with
//! zero bytes; character fields may be padded with either zeros or spaces.
//! Only trailing zeros are stripped here. Spaces are part of the value and
//! survive decoding.

use eyre::{bail, Result};

use super::decoder::TextDecoder;
use crate::error::TableError;

/// Strips trailing `0x00` bytes. Interior zeros and spaces are kept.
pub fn trim_trailing_zeros(raw: &[u8]) -> &[u8] {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &raw[..end]
}

/// Trims trailing zeros, runs the optional decoder, and produces a `String`.
///
/// `context` is only evaluated on failure and names what was being decoded.
/// Decoder output that is not valid UTF-8 is converted lossily.
pub fn decode_text<C>(
    raw: &[u8],
    decoder: Option<&dyn TextDecoder>,
    context: C,
) -> Result<String>
where
    C: FnOnce() -> String,
{
    let trimmed = trim_trailing_zeros(raw);

    let bytes = match decoder {
        None => trimmed.to_vec(),
        Some(decoder) => match decoder.decode(trimmed) {
            Ok(bytes) => bytes,
            Err(e) => bail!(TableError::decode(context(), &e)),
        },
    };

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
