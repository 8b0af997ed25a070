//! # Table Schema
//!
//! This module parses the field-descriptor array that follows the file header
//! into a [`TableSchema`]: the ordered list of [`Field`]s with their record
//! offsets pre-computed, so every later field access is a direct slice.
//!
//! ## Offset Computation
//!
//! Offsets are not stored in the file. They are the running sum of the
//! preceding field lengths, measured from the byte after the deletion flag:
//!
//! ```text
//! record:  [flag][ NAME (10) ][ QTY (8) ][ PRICE (9) ]
//! offset:         0           10         18
//! ```
//!
//! ## Name Resolution
//!
//! Field names are compared byte-for-byte after decoding. Files that declare
//! the same name twice are accepted and lookups return the first match.
//!
//! ## Module Structure
//!
//! - `field`: `Field`, `FieldType`, and `FieldKind`

mod field;

pub use field::{Field, FieldKind, FieldType};

use eyre::{bail, Result};

use crate::config::{DELETION_FLAG_SIZE, FIELD_BLOCK_START, FIELD_DESCRIPTOR_SIZE};
use crate::encoding::{decode_text, TextDecoder};
use crate::error::TableError;
use crate::storage::{FieldDescriptorBlock, Header};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    fields: Vec<Field>,
    data_length: usize,
}

impl TableSchema {
    /// Builds a schema from fields whose offsets are already assigned.
    pub fn new(fields: Vec<Field>) -> Self {
        let data_length = fields.iter().map(Field::end).max().unwrap_or(0);
        Self {
            fields,
            data_length,
        }
    }

    /// Parses `header.field_count()` descriptor blocks starting at byte 32.
    pub fn parse(
        bytes: &[u8],
        header: &Header,
        decoder: Option<&dyn TextDecoder>,
    ) -> Result<Self> {
        let field_count = header.field_count()?;
        let mut fields = Vec::with_capacity(field_count);
        let mut offset = 0usize;

        for idx in 0..field_count {
            let block_start = FIELD_BLOCK_START + idx * FIELD_DESCRIPTOR_SIZE;
            let block = FieldDescriptorBlock::at(bytes, block_start)?;

            let name = decode_text(block.raw_name(), decoder, || {
                format!("name of field #{}", idx)
            })?;

            let field = Field::new(
                name,
                FieldType::from_tag(block.field_type()),
                block.length(),
                block.decimal_count(),
                offset,
            );
            offset += field.length() as usize;
            fields.push(field);
        }

        log::trace!(
            "parsed {} field descriptors covering {} bytes",
            fields.len(),
            offset
        );

        Ok(Self {
            fields,
            data_length: offset,
        })
    }

    /// Fails unless every field fits after the deletion flag of a record.
    pub fn check_record_length(&self, header: &Header) -> Result<()> {
        let required = self.data_length + DELETION_FLAG_SIZE;
        let declared = header.record_length() as usize;
        if required > declared {
            bail!(TableError::format(format!(
                "record length {} cannot hold the deletion flag and {} bytes of field data",
                declared, self.data_length
            )));
        }
        Ok(())
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, idx: usize) -> Option<&Field> {
        self.fields.get(idx)
    }

    /// Index of the first field named exactly `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    pub fn find(&self, name: &str) -> Option<&Field> {
        self.position(name).map(|idx| &self.fields[idx])
    }

    /// Sum of all field lengths.
    pub fn data_length(&self) -> usize {
        self.data_length
    }
}
