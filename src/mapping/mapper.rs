//! # Schema-Driven Mapper
//!
//! Resolves a destination type's bindings against a table schema once, then
//! applies the resulting [`SlotPlan`] to every record.
//!
//! ## Resolution
//!
//! ```text
//! bindings()                      TableSchema
//! ┌──────────────────────────┐    ┌──────────────┐
//! │ name   <- "HQZQJC" Text  │───>│ 0 HQZQJC  C  │  first exact match
//! │ volume <- "HQCJSL" Int   │───>│ 3 HQCJSL  N  │
//! │ extra  <- "MISSING" Int  │─X  │ ...          │  no match: slot keeps zero
//! └──────────────────────────┘    └──────────────┘
//! ```
//!
//! A binding whose declared kind cannot hold the field's converted value is a
//! binding error raised before any record is read. Fields with unsupported
//! type tags are left out of the plan, mirroring the generic decoder that
//! omits them.
//!
//! ## Application
//!
//! Each planned slot runs the same [`decode_field`] conversion as the generic
//! decoder, so a mapped slot always equals the generic value of its field.

use eyre::{bail, Result};
use smallvec::SmallVec;

use super::binding::{SlotBinding, SlotMut, TableRecord};
use crate::encoding::TextDecoder;
use crate::error::TableError;
use crate::records::{decode_field, FieldValue, RecordView};
use crate::schema::{FieldKind, TableSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlannedSlot {
    slot: usize,
    field: usize,
}

#[derive(Debug, Clone)]
pub struct SlotPlan<'s> {
    schema: &'s TableSchema,
    bindings: &'static [SlotBinding],
    slots: SmallVec<[PlannedSlot; 16]>,
}

impl<'s> SlotPlan<'s> {
    pub fn resolve<T: TableRecord>(schema: &'s TableSchema) -> Result<Self> {
        let bindings = T::bindings();
        let mut slots = SmallVec::new();

        for (slot, binding) in bindings.iter().enumerate() {
            let Some(field_idx) = schema.position(binding.field) else {
                log::debug!(
                    "slot '{}' bound to '{}' has no matching field; leaving default",
                    binding.slot,
                    binding.field
                );
                continue;
            };

            let field = &schema.fields()[field_idx];
            let field_kind = field.kind();
            if field_kind == FieldKind::Unsupported {
                log::debug!(
                    "slot '{}' bound to '{}' with unsupported type tag {:?}; leaving default",
                    binding.slot,
                    binding.field,
                    char::from(field.field_type().tag())
                );
                continue;
            }

            if !binding.kind.accepts(field_kind) {
                bail!(TableError::binding(format!(
                    "slot '{}' is declared {} but field '{}' decodes as {}",
                    binding.slot,
                    binding.kind,
                    binding.field,
                    field_kind.name()
                )));
            }

            slots.push(PlannedSlot {
                slot,
                field: field_idx,
            });
        }

        log::trace!(
            "resolved {} of {} bindings against {} fields",
            slots.len(),
            bindings.len(),
            schema.field_count()
        );

        Ok(Self {
            schema,
            bindings,
            slots,
        })
    }

    pub fn schema(&self) -> &'s TableSchema {
        self.schema
    }

    /// Number of bindings that matched a decodable field.
    pub fn planned_count(&self) -> usize {
        self.slots.len()
    }

    /// Decodes the planned fields of `view` into `dest`.
    pub fn apply<T: TableRecord>(
        &self,
        view: &RecordView<'_>,
        decoder: Option<&dyn TextDecoder>,
        dest: &mut T,
    ) -> Result<()> {
        for planned in &self.slots {
            let field = &self.schema.fields()[planned.field];
            let binding = &self.bindings[planned.slot];

            let Some(value) = decode_field(field, view.field_slice(field), decoder)? else {
                continue;
            };

            let Some(slot) = dest.slot_mut(planned.slot) else {
                bail!(TableError::binding(format!(
                    "slot '{}' (index {}) is declared but not exposed by slot_mut",
                    binding.slot, planned.slot
                )));
            };

            write_slot(slot, value, binding)?;
        }
        Ok(())
    }
}

fn write_slot(slot: SlotMut<'_>, value: FieldValue, binding: &SlotBinding) -> Result<()> {
    match (slot, value) {
        (SlotMut::Text(dest), FieldValue::Text(v)) => *dest = v,
        (SlotMut::Int(dest), FieldValue::Int(v)) => *dest = v,
        (SlotMut::Float(dest), FieldValue::Float(v)) => *dest = v,
        (slot, value) => bail!(TableError::binding(format!(
            "slot '{}' holds {} but field '{}' produced {}",
            binding.slot,
            slot.kind(),
            binding.field,
            value.kind().name()
        ))),
    }
    Ok(())
}
