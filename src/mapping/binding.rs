//! # Slot Bindings
//!
//! A destination type describes itself to the mapper with a static list of
//! [`SlotBinding`]s: for every slot, the file field it reads from and the
//! slot's declared [`SlotKind`]. The mapper then writes converted values
//! through [`TableRecord::slot_mut`].
//!
//! Most types never implement [`TableRecord`] by hand; the
//! [`dbf_record!`](crate::dbf_record) macro generates the bindings and the
//! slot accessor from an annotated struct definition.
//!
//! ## Slot Kinds
//!
//! | SlotKind | Rust type | Accepts field kind |
//! |----------|-----------|--------------------|
//! | `Text` | `String` | text (`C`) |
//! | `Int` | `i64` | integer (`N`/`F`, no decimals) |
//! | `Float` | `f64` | decimal (`N`/`F`, decimals > 0) |

use std::fmt;

use crate::schema::FieldKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Text,
    Int,
    Float,
}

impl SlotKind {
    pub fn name(&self) -> &'static str {
        match self {
            SlotKind::Text => "String",
            SlotKind::Int => "i64",
            SlotKind::Float => "f64",
        }
    }

    /// Whether a field of `kind` converts into this slot.
    pub fn accepts(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (SlotKind::Text, FieldKind::Text)
                | (SlotKind::Int, FieldKind::Integer)
                | (SlotKind::Float, FieldKind::Decimal)
        )
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One `(slot, file field, slot kind)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBinding {
    pub slot: &'static str,
    pub field: &'static str,
    pub kind: SlotKind,
}

impl SlotBinding {
    pub const fn new(slot: &'static str, field: &'static str, kind: SlotKind) -> Self {
        Self { slot, field, kind }
    }
}

/// Mutable access to one destination slot.
#[derive(Debug)]
pub enum SlotMut<'a> {
    Text(&'a mut String),
    Int(&'a mut i64),
    Float(&'a mut f64),
}

impl SlotMut<'_> {
    pub fn kind(&self) -> SlotKind {
        match self {
            SlotMut::Text(_) => SlotKind::Text,
            SlotMut::Int(_) => SlotKind::Int,
            SlotMut::Float(_) => SlotKind::Float,
        }
    }
}

/// Rust types that can back a slot.
pub trait SlotType {
    const KIND: SlotKind;

    fn slot_mut(&mut self) -> SlotMut<'_>;
}

impl SlotType for String {
    const KIND: SlotKind = SlotKind::Text;

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Text(self)
    }
}

impl SlotType for i64 {
    const KIND: SlotKind = SlotKind::Int;

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Int(self)
    }
}

impl SlotType for f64 {
    const KIND: SlotKind = SlotKind::Float;

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Float(self)
    }
}

/// A destination type the mapper can populate.
///
/// `Default` supplies the zero value every slot keeps when its field is
/// missing from the file. `slot_mut(i)` must return the slot described by
/// `bindings()[i]`.
pub trait TableRecord: Default {
    fn bindings() -> &'static [SlotBinding];

    fn slot_mut(&mut self, slot: usize) -> Option<SlotMut<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_kinds_accept_matching_field_kinds_only() {
        assert!(SlotKind::Text.accepts(FieldKind::Text));
        assert!(SlotKind::Int.accepts(FieldKind::Integer));
        assert!(SlotKind::Float.accepts(FieldKind::Decimal));

        assert!(!SlotKind::Int.accepts(FieldKind::Decimal));
        assert!(!SlotKind::Float.accepts(FieldKind::Integer));
        assert!(!SlotKind::Text.accepts(FieldKind::Integer));
        assert!(!SlotKind::Text.accepts(FieldKind::Unsupported));
    }

    #[test]
    fn slot_types_report_their_kind() {
        let mut s = String::new();
        let mut i = 0i64;
        let mut f = 0f64;

        assert_eq!(s.slot_mut().kind(), <String as SlotType>::KIND);
        assert_eq!(i.slot_mut().kind(), <i64 as SlotType>::KIND);
        assert_eq!(f.slot_mut().kind(), <f64 as SlotType>::KIND);
    }
}
