//! # Record Access and Decoding
//!
//! This module turns the fixed-width record bytes of a table file into values.
//! Records are never copied out of the table buffer until a field is decoded.
//!
//! ## Record Binary Layout
//!
//! ```text
//! +------+-------------------+-------------------+-----+
//! | Flag | Field 0           | Field 1           | ... |
//! | (u8) | [u8; length_0]    | [u8; length_1]    |     |
//! +------+-------------------+-------------------+-----+
//!        ^ offset 0          ^ offset length_0
//! ```
//!
//! | Component | Description |
//! |-----------|-------------|
//! | **Flag** | `'*'` = deleted, anything else = active |
//! | **Fields** | Contiguous, widths and offsets from the schema |
//!
//! ## Module Structure
//!
//! - `view`: RecordView for zero-copy access to flag and field bytes
//! - `decode`: per-field conversion and the generic DecodedRecord
//! - `value`: the FieldValue tagged union

pub mod decode;
pub mod value;
pub mod view;


pub use decode::{decode_field, decode_record, DecodedRecord};
pub use value::FieldValue;
pub use view::RecordView;
