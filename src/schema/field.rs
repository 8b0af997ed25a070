//! # Field Definitions
//!
//! A [`Field`] is one parsed descriptor block: the column name, its type tag,
//! its fixed width, and its offset inside a record's data area.
//!
//! ## Type Tags
//!
//! | Tag | FieldType | Decoded as |
//! |-----|-----------|------------|
//! | `C` | Character | text |
//! | `N` | Numeric | `i64` when decimals = 0, else `f64` |
//! | `F` | Float | same as `N` |
//! | other | Other(tag) | skipped |
//!
//! Dates (`D`), logicals (`L`), and memos (`M`) land in `Other` and are not
//! decoded.

use std::ops::Range;

use crate::config::{TYPE_CHARACTER, TYPE_FLOAT, TYPE_NUMERIC};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Character,
    Numeric,
    Float,
    Other(u8),
}

impl FieldType {
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            TYPE_CHARACTER => FieldType::Character,
            TYPE_NUMERIC => FieldType::Numeric,
            TYPE_FLOAT => FieldType::Float,
            other => FieldType::Other(other),
        }
    }

    pub fn tag(&self) -> u8 {
        match self {
            FieldType::Character => TYPE_CHARACTER,
            FieldType::Numeric => TYPE_NUMERIC,
            FieldType::Float => TYPE_FLOAT,
            FieldType::Other(tag) => *tag,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Numeric | FieldType::Float)
    }
}

/// How a field's bytes are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Unsupported,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    field_type: FieldType,
    length: u8,
    decimal_count: u8,
    offset: usize,
}

impl Field {
    /// `decimal_count` is forced to zero for non-numeric types.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        length: u8,
        decimal_count: u8,
        offset: usize,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            length,
            decimal_count: if field_type.is_numeric() {
                decimal_count
            } else {
                0
            },
            offset,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn decimal_count(&self) -> u8 {
        self.decimal_count
    }

    /// Offset relative to the first byte after the deletion flag.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn end(&self) -> usize {
        self.offset + self.length as usize
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn kind(&self) -> FieldKind {
        match self.field_type {
            FieldType::Character => FieldKind::Text,
            FieldType::Numeric | FieldType::Float if self.decimal_count > 0 => FieldKind::Decimal,
            FieldType::Numeric | FieldType::Float => FieldKind::Integer,
            FieldType::Other(_) => FieldKind::Unsupported,
        }
    }
}
