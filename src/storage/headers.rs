//! # File Header Definitions
//!
//! This module provides zerocopy-based views of the two fixed layouts at the
//! start of a table file, plus the owned [`Header`] the rest of the crate
//! works with.
//!
//! ## Header Layout
//!
//! ```text
//! +------+----------+--------------+-------------+-------------+----------+
//! | 0    | 1..=3    | 4..=7        | 8..=9       | 10..=11     | 12..=31  |
//! | sig  | YY MM DD | record count | header len  | record len  | reserved |
//! | u8   | u8 x3    | u32 LE       | u16 LE      | u16 LE      |          |
//! +------+----------+--------------+-------------+-------------+----------+
//! ```
//!
//! Only the first 12 bytes are decoded. The year byte is an offset from 1900.
//! Dates are not validated: month 0 or day 31 of February come back as stored.
//!
//! ## Field Descriptor Layout
//!
//! Descriptors are 32-byte blocks starting at byte 32:
//!
//! ```text
//! +-------------+-----+------+---------+--------+----------+----------+
//! | 0..=9       | 10  | 11   | 12..=15 | 16     | 17       | 18..=31  |
//! | name (NUL   | NUL | type | address | length | decimals | reserved |
//! | padded)     |     | tag  |         | u8     | u8       |          |
//! +-------------+-----+------+---------+--------+----------+----------+
//! ```
//!
//! ## Zerocopy Safety
//!
//! Both raw structs are `Unaligned` with `u8`-based or little-endian wrapper
//! fields, so they can be read in place from any offset of the file buffer.

use eyre::{bail, Result};
use zerocopy::little_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::config::{
    DELETION_FLAG_SIZE, FIELD_DESCRIPTOR_SIZE, FIELD_NAME_WIDTH, HEADER_PREFIX_SIZE,
    MIN_HEADER_LENGTH, UPDATE_YEAR_BASE,
};
use crate::error::TableError;

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct HeaderPrefix {
    signature: u8,
    update_year: u8,
    update_month: u8,
    update_day: u8,
    record_count: U32,
    header_length: U16,
    record_length: U16,
}

const _: () = assert!(std::mem::size_of::<HeaderPrefix>() == HEADER_PREFIX_SIZE);

impl HeaderPrefix {
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        if bytes.len() < HEADER_PREFIX_SIZE {
            bail!(TableError::format(format!(
                "table file header invalid: {} bytes, need at least {}",
                bytes.len(),
                HEADER_PREFIX_SIZE
            )));
        }

        Self::ref_from_bytes(&bytes[..HEADER_PREFIX_SIZE])
            .map_err(|e| eyre::eyre!("failed to parse HeaderPrefix: {:?}", e))
    }

    pub fn signature(&self) -> u8 {
        self.signature
    }

    pub fn update_date(&self) -> UpdateDate {
        UpdateDate {
            year: UPDATE_YEAR_BASE + u16::from(self.update_year),
            month: self.update_month,
            day: self.update_day,
        }
    }

    zerocopy_getters! {
        record_count: u32,
        header_length: u16,
        record_length: u16,
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct FieldDescriptorBlock {
    name: [u8; FIELD_NAME_WIDTH],
    name_terminator: u8,
    field_type: u8,
    data_address: [u8; 4],
    length: u8,
    decimal_count: u8,
    reserved: [u8; 14],
}

const _: () = assert!(std::mem::size_of::<FieldDescriptorBlock>() == FIELD_DESCRIPTOR_SIZE);

impl FieldDescriptorBlock {
    /// Reads the descriptor block at `offset`, failing if it is not fully present.
    pub fn at(bytes: &[u8], offset: usize) -> Result<&Self> {
        let end = offset + FIELD_DESCRIPTOR_SIZE;
        if end > bytes.len() {
            bail!(TableError::format(format!(
                "table file fields invalid: descriptor at byte {} ends at {} but file has {} bytes",
                offset,
                end,
                bytes.len()
            )));
        }

        Self::ref_from_bytes(&bytes[offset..end])
            .map_err(|e| eyre::eyre!("failed to parse FieldDescriptorBlock: {:?}", e))
    }

    pub fn raw_name(&self) -> &[u8; FIELD_NAME_WIDTH] {
        &self.name
    }

    pub fn field_type(&self) -> u8 {
        self.field_type
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn decimal_count(&self) -> u8 {
        self.decimal_count
    }
}

/// Last-update date exactly as stored, with the year rebased onto 1900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpdateDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl std::fmt::Display for UpdateDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    signature: u8,
    update_date: UpdateDate,
    record_count: u32,
    header_length: u16,
    record_length: u16,
}

impl Header {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let prefix = HeaderPrefix::from_bytes(bytes)?;
        Ok(Self {
            signature: prefix.signature(),
            update_date: prefix.update_date(),
            record_count: prefix.record_count(),
            header_length: prefix.header_length(),
            record_length: prefix.record_length(),
        })
    }

    pub fn signature(&self) -> u8 {
        self.signature
    }

    pub fn update_date(&self) -> UpdateDate {
        self.update_date
    }

    pub fn record_count(&self) -> u32 {
        self.record_count
    }

    pub fn header_length(&self) -> u16 {
        self.header_length
    }

    pub fn record_length(&self) -> u16 {
        self.record_length
    }

    /// Number of descriptor blocks: `(header_length - 33) / 32`.
    pub fn field_count(&self) -> Result<usize> {
        let header_length = self.header_length as usize;
        if header_length < MIN_HEADER_LENGTH {
            bail!(TableError::format(format!(
                "header length {} is below the minimum of {}",
                header_length, MIN_HEADER_LENGTH
            )));
        }
        Ok((header_length - MIN_HEADER_LENGTH) / FIELD_DESCRIPTOR_SIZE)
    }

    /// Bytes available for field data in each record.
    pub fn record_data_length(&self) -> usize {
        (self.record_length as usize).saturating_sub(DELETION_FLAG_SIZE)
    }

    /// Absolute offset of `row` in the file buffer.
    pub fn record_offset(&self, row: usize) -> usize {
        row * self.record_length as usize + self.header_length as usize
    }

    /// File length needed to hold every declared record.
    pub fn records_end(&self) -> usize {
        self.record_offset(self.record_count as usize)
    }
}
