//! # dbfkit - Read-Only dBASE Table Reader
//!
//! dbfkit opens dBASE-style `.dbf` table files (fixed header, 32-byte field
//! descriptors, fixed-width records) and decodes their rows either into
//! name-keyed generic records or into caller-defined structs.
//!
//! - **Zero-copy record access**: the file is read once into a buffer and
//!   every record is a slice of it until a field is decoded
//! - **Injected text decoding**: names and character fields go through a
//!   caller-supplied decoder, so legacy code pages never get guessed
//! - **Shareable handles**: a `Table` is immutable after opening and can be
//!   queried from many threads at once
//!
//! ## Quick Start
//!
//! ```ignore
//! use dbfkit::{dbf_record, Table};
//!
//! dbf_record! {
//!     #[derive(Debug)]
//!     pub struct Stock {
//!         #[dbf = "HQZQJC"]
//!         pub name: String,
//!         #[dbf = "HQZRSP"]
//!         pub pre_close: f64,
//!     }
//! }
//!
//! let table = Table::builder()
//!     .path("show2003.dbf")
//!     .decoder(gbk_to_utf8)
//!     .open()?;
//!
//! let first = table.get_record(0)?;
//! println!("{:?}", first.text("HQZQJC"));
//!
//! let stocks: Vec<Stock> = table.map_to()?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          Public API (Table, TableBuilder)     │
//! ├──────────────────────┬───────────────────────┤
//! │  Generic decoding    │  Typed mapping        │
//! │  (DecodedRecord)     │  (TableRecord/SlotPlan)│
//! ├──────────────────────┴───────────────────────┤
//! │   Record views and per-field conversion       │
//! ├──────────────────────────────────────────────┤
//! │   Schema (field descriptors, offsets)         │
//! ├──────────────────────────────────────────────┤
//! │   Storage (zerocopy header layouts, file I/O) │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## File Layout
//!
//! ```text
//! 0        12              32                      headerLength
//! ┌────────┬───────────────┬───────────┬─────┬────┬──────────────────────┐
//! │ prefix │ (unused)      │ field #0  │ ... │0x0D│ record 0 │ record 1 …│
//! └────────┴───────────────┴───────────┴─────┴────┴──────────────────────┘
//!                           32 bytes each          recordLength each
//! ```
//!
//! ## Module Overview
//!
//! - [`config`]: layout constants
//! - [`error`]: TableError and ErrorKind
//! - [`storage`]: header structs and whole-file reads
//! - [`schema`]: field descriptors and their classification
//! - [`encoding`]: the TextDecoder collaborator and text trimming
//! - [`parsing`]: numeric text with empty-value sentinels
//! - [`records`]: RecordView, FieldValue, DecodedRecord
//! - [`mapping`]: slot bindings and the schema-driven mapper
//! - [`table`]: Table and TableBuilder

#[macro_use]
mod macros;

pub mod config;
pub mod encoding;
pub mod error;
pub mod mapping;
pub mod parsing;
pub mod records;
pub mod schema;
pub mod storage;
pub mod table;

#[cfg(test)]
mod test_support;

pub use encoding::{Latin1Decoder, SharedDecoder, TextDecoder};
pub use error::{error_kind, ErrorKind, TableError};
pub use mapping::{SlotBinding, SlotKind, SlotMut, SlotType, TableRecord};
pub use records::{DecodedRecord, FieldValue, RecordView};
pub use schema::{Field, FieldKind, FieldType, TableSchema};
pub use storage::{Header, UpdateDate};
pub use table::{Records, Table, TableBuilder, TableSource};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
