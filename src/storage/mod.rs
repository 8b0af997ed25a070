//! # Storage Module
//!
//! This module owns the byte-level side of a table file: loading the bytes
//! and reading the fixed layouts at the front of the buffer.
//!
//! ## File Layout
//!
//! ```text
//! +----------------------------+  byte 0
//! | File header (32 bytes)     |  signature, date, counts, lengths
//! +----------------------------+  byte 32
//! | Field descriptors          |  N x 32-byte blocks
//! | ...                        |
//! +----------------------------+  byte 32 + 32N
//! | Terminator (0x0D)          |
//! +----------------------------+  byte header_length
//! | Record 0                   |  record_length bytes, flag + field data
//! | Record 1                   |
//! | ...                        |
//! +----------------------------+  header_length + count * record_length
//! ```
//!
//! ## Ownership Model
//!
//! The whole file is read into one `Vec<u8>` at open time. Every later read
//! is a borrowed slice of that buffer, so parsed views never outlive the
//! table and no file handle stays open.
//!
//! ## Module Organization
//!
//! - `headers`: zerocopy views of the header prefix and descriptor blocks
//! - `source`: reading a table file from disk

mod headers;
mod source;

pub use headers::{FieldDescriptorBlock, Header, HeaderPrefix, UpdateDate};
pub use source::read_table_file;
