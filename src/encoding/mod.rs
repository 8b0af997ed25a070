//! # Encoding Module
//!
//! This module provides text handling for dbfkit, including:
//!
//! - **Decoder collaborator**: the injectable [`TextDecoder`] used for field
//!   names and character fields
//! - **Fixed-width text**: trailing-zero trimming and decoding into `String`

pub mod decoder;
pub mod text;

pub use decoder::{Latin1Decoder, SharedDecoder, TextDecoder};
pub use text::{decode_text, trim_trailing_zeros};
