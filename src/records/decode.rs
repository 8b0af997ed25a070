//! # Record Decoding
//!
//! Converts a [`RecordView`] into a [`DecodedRecord`]: a deletion flag plus a
//! name-keyed map of [`FieldValue`]s. The per-field conversion in
//! [`decode_field`] is shared with the typed mapper so both paths agree on
//! every byte.
//!
//! ## Conversion Rules
//!
//! | Field kind | Bytes | Value |
//! |------------|-------|-------|
//! | Text | trailing `\0` trimmed, decoder applied | `Text` |
//! | Integer | ASCII whitespace trimmed, `"-"` = 0 | `Int` |
//! | Decimal | ASCII whitespace trimmed, `"-.---"` = 0.0 | `Float` |
//! | Unsupported | not read | absent from the map |
//!
//! The deletion flag never influences field decoding: a deleted record
//! decodes its fields exactly like an active one.

use eyre::Result;
use hashbrown::HashMap;

use super::value::FieldValue;
use super::view::RecordView;
use crate::encoding::{decode_text, TextDecoder};
use crate::parsing::{parse_decimal_field, parse_integer_field};
use crate::schema::{Field, FieldKind};

/// Converts one field's bytes. Returns `None` for unsupported type tags.
pub fn decode_field(
    field: &Field,
    raw: &[u8],
    decoder: Option<&dyn TextDecoder>,
) -> Result<Option<FieldValue>> {
    let value = match field.kind() {
        FieldKind::Text => FieldValue::Text(decode_text(raw, decoder, || {
            format!("field '{}'", field.name())
        })?),
        FieldKind::Integer => FieldValue::Int(parse_integer_field(raw, field.name())?),
        FieldKind::Decimal => FieldValue::Float(parse_decimal_field(raw, field.name())?),
        FieldKind::Unsupported => return Ok(None),
    };
    Ok(Some(value))
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedRecord {
    deleted: bool,
    fields: HashMap<String, FieldValue>,
}

impl DecodedRecord {
    pub fn new(deleted: bool, fields: HashMap<String, FieldValue>) -> Self {
        Self { deleted, fields }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_int)
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_float)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    pub fn into_fields(self) -> HashMap<String, FieldValue> {
        self.fields
    }
}

/// Decodes every supported field of `view`.
///
/// When the file declares a name twice, every occurrence is decoded but the
/// map keeps the first one, matching how named lookups resolve. Readers that
/// let the last duplicate overwrite earlier ones would disagree here; keeping
/// the first makes a mapped slot always equal the generic value of its field.
pub fn decode_record(
    view: &RecordView<'_>,
    decoder: Option<&dyn TextDecoder>,
) -> Result<DecodedRecord> {
    let schema = view.schema();
    let mut fields = HashMap::with_capacity(schema.field_count());

    for field in schema.fields() {
        if let Some(value) = decode_field(field, view.field_slice(field), decoder)? {
            fields.entry(field.name().to_string()).or_insert(value);
        }
    }

    Ok(DecodedRecord::new(view.is_deleted(), fields))
}
