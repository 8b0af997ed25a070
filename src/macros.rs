//! # Macros
//!
//! ## zerocopy_getters!
//!
//! Generates read-only accessors for zerocopy struct fields that use
//! little-endian wrapper types (U16, U32).
//!
//! ```ignore
//! #[repr(C)]
//! struct HeaderPrefix {
//!     record_count: U32,
//!     header_length: U16,
//! }
//!
//! impl HeaderPrefix {
//!     zerocopy_getters! {
//!         record_count: u32,
//!         header_length: u16,
//!     }
//! }
//!
//! // Generates:
//! // pub fn record_count(&self) -> u32 { self.record_count.get() }
//! // pub fn header_length(&self) -> u16 { self.header_length.get() }
//! ```
//!
//! ## dbf_record!
//!
//! Declares a struct and implements [`TableRecord`](crate::mapping::TableRecord)
//! for it. Every field carries a `#[dbf = "NAME"]` attribute naming the file
//! field it is read from; the field type must be `String`, `i64`, or `f64`.
//!
//! ```ignore
//! dbfkit::dbf_record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Stock {
//!         #[dbf = "HQZQJC"]
//!         pub name: String,
//!         #[dbf = "HQZRSP"]
//!         pub pre_close: f64,
//!         #[dbf = "HQCJSL"]
//!         pub volume: i64,
//!     }
//! }
//!
//! let stocks: Vec<Stock> = table.map_to()?;
//! let volume = table.get_record(0)?.int(Stock::FIELD_VOLUME);
//! ```
//!
//! The macro derives `Default` (the zero value of unmapped slots) and adds a
//! `FIELD_<SLOT>` constant holding each slot's file field name.
//!
//! Limits:
//!
//! - `#[dbf = "..."]` must be the first attribute of a field. Doc comments and
//!   other attributes go after it.
//! - Do not derive `Default` on the struct yourself; the macro already does.

/// Generates getter methods for zerocopy little-endian fields.
macro_rules! zerocopy_getters {
    ($($field:ident : $native_ty:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $field(&self) -> $native_ty {
                self.$field.get()
            }
        )*
    };
}

/// Declares a struct bound to table file fields.
#[macro_export]
macro_rules! dbf_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                #[dbf = $file_field:literal]
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        $crate::__private::paste! {
            #[allow(dead_code)]
            impl $name {
                $(
                    pub const [<FIELD_ $field:upper>]: &'static str = $file_field;
                )*
            }
        }

        impl $crate::mapping::TableRecord for $name {
            fn bindings() -> &'static [$crate::mapping::SlotBinding] {
                const BINDINGS: &[$crate::mapping::SlotBinding] = &[
                    $(
                        $crate::mapping::SlotBinding::new(
                            stringify!($field),
                            $file_field,
                            <$ty as $crate::mapping::SlotType>::KIND,
                        ),
                    )*
                ];
                BINDINGS
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn slot_mut(&mut self, slot: usize) -> Option<$crate::mapping::SlotMut<'_>> {
                let mut idx = 0usize;
                $(
                    if slot == idx {
                        return Some($crate::mapping::SlotType::slot_mut(&mut self.$field));
                    }
                    idx += 1;
                )*
                None
            }
        }
    };
}
