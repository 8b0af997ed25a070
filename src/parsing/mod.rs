//! # Field Value Parsing
//!
//! This module converts the ASCII text of numeric fields into typed values.
//!
//! ## Module Structure
//!
//! - `numeric`: integer and decimal parsing with empty-field sentinels
//!
//! ## Error Handling
//!
//! All parsing functions return `eyre::Result`. Failures carry a
//! [`TableError::Parse`](crate::error::TableError::Parse) naming the field and
//! the offending text:
//!
//! ```text
//! "cannot parse field 'QTY' value '4x2': invalid digit found in string"
//! ```

mod numeric;

pub use numeric::{parse_decimal_field, parse_integer_field, trim_numeric};
