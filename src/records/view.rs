//! # RecordView - Zero-Copy Record Access
//!
//! `RecordView` borrows one record's bytes from the table buffer and hands out
//! field slices at their pre-computed offsets without decoding anything.
//!
//! ## Usage
//!
//! ```ignore
//! let view = table.record_view(3)?;
//! if !view.is_deleted() {
//!     let raw_qty: &[u8] = view.field_bytes_by_name("QTY").unwrap();
//! }
//! ```
//!
//! ## Thread Safety
//!
//! `RecordView` borrows immutably from the table's buffer. Any number of views
//! over the same table can be alive on any number of threads.

use eyre::{bail, Result};

use crate::config::{DELETED_FLAG, DELETION_FLAG_SIZE};
use crate::error::TableError;
use crate::schema::{Field, TableSchema};

#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    data: &'a [u8],
    schema: &'a TableSchema,
}

impl<'a> RecordView<'a> {
    /// `data` is the full record including the leading deletion flag.
    pub fn new(data: &'a [u8], schema: &'a TableSchema) -> Result<Self> {
        let required = DELETION_FLAG_SIZE + schema.data_length();
        if data.len() < required {
            bail!(TableError::format(format!(
                "record of {} bytes is too small for {} bytes of fields",
                data.len(),
                schema.data_length()
            )));
        }
        Ok(Self { data, schema })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn schema(&self) -> &'a TableSchema {
        self.schema
    }

    pub fn flag(&self) -> u8 {
        self.data[0]
    }

    pub fn is_deleted(&self) -> bool {
        self.flag() == DELETED_FLAG
    }

    /// Record bytes after the deletion flag; field offsets index into this.
    pub fn field_data(&self) -> &'a [u8] {
        &self.data[DELETION_FLAG_SIZE..]
    }

    pub(crate) fn field_slice(&self, field: &Field) -> &'a [u8] {
        &self.field_data()[field.range()]
    }

    pub fn field_bytes(&self, idx: usize) -> Option<&'a [u8]> {
        self.schema.field(idx).map(|field| self.field_slice(field))
    }

    pub fn field_bytes_by_name(&self, name: &str) -> Option<&'a [u8]> {
        self.schema.find(name).map(|field| self.field_slice(field))
    }
}
