//! # Text Decoder Collaborator
//!
//! Table files predate Unicode and store names and character fields in
//! whatever code page the producing application used (GBK, CP437, CP1252,
//! ...). dbfkit never guesses: the caller injects a [`TextDecoder`] that turns
//! raw source bytes into UTF-8 bytes, or fails. Without a decoder the bytes
//! pass through unmodified.
//!
//! Any `Fn(&[u8]) -> eyre::Result<Vec<u8>> + Send + Sync` closure is a decoder:
//!
//! ```ignore
//! let table = Table::builder()
//!     .path("quotes.dbf")
//!     .decoder(|raw: &[u8]| Ok(raw.iter().map(|&b| b as char).collect::<String>().into_bytes()))
//!     .open()?;
//! ```
//!
//! The decoder is shared behind an `Arc` and must be `Send + Sync` so the
//! table handle stays shareable across reader threads.
//!
//! ## Non-UTF-8 Bytes
//!
//! Decoded text is stored as `String`. Bytes that are not valid UTF-8 after
//! decoding (including pass-through bytes when no decoder is set) are
//! replaced with U+FFFD. Two field names that differ only in such bytes
//! therefore collapse to the same key. Use
//! [`RecordView::field_bytes`](crate::records::RecordView::field_bytes) when
//! the raw bytes matter.

use std::sync::Arc;

use eyre::Result;

pub trait TextDecoder: Send + Sync {
    fn decode(&self, raw: &[u8]) -> Result<Vec<u8>>;
}

impl<F> TextDecoder for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    fn decode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        self(raw)
    }
}

pub type SharedDecoder = Arc<dyn TextDecoder>;

/// ISO-8859-1 decoder: every byte maps to the code point of the same value.
///
/// Never fails. Handy for files written by Western code pages where exact
/// punctuation in the 0x80..0x9F range does not matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1Decoder;

impl TextDecoder for Latin1Decoder {
    fn decode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let text: String = raw.iter().map(|&b| char::from(b)).collect();
        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_decoders() {
        let upper = |raw: &[u8]| -> Result<Vec<u8>> { Ok(raw.to_ascii_uppercase()) };
        assert_eq!(upper.decode(b"abc").unwrap(), b"ABC".to_vec());
    }

    #[test]
    fn latin1_maps_high_bytes_to_code_points() {
        let decoded = Latin1Decoder.decode(&[b'C', 0xE9, b'z']).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "Céz");
    }

    #[test]
    fn shared_decoder_is_object_safe() {
        let shared: SharedDecoder = Arc::new(Latin1Decoder);
        assert_eq!(shared.decode(b"plain").unwrap(), b"plain".to_vec());
    }
}
