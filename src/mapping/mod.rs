//! # Typed Record Mapping
//!
//! This module binds table fields to the slots of caller-defined structs, so
//! records can be read as `Vec<Stock>` instead of name-keyed maps.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐   bindings()   ┌──────────┐   apply()   ┌──────────────┐
//! │ dbf_record! /   │──────────────>│ SlotPlan │────────────>│ Vec<T>, one  │
//! │ impl TableRecord│               │ (cached  │  per record │ T per record │
//! └─────────────────┘  TableSchema  │ per call)│             └──────────────┘
//!                     ─────────────>└──────────┘
//! ```
//!
//! Bindings are a static declaration, resolved against the file's schema once
//! per mapping call. No runtime type introspection is involved.
//!
//! ## Module Structure
//!
//! - `binding`: SlotKind, SlotBinding, SlotMut, SlotType, TableRecord
//! - `mapper`: SlotPlan resolution and application

pub mod binding;
pub mod mapper;

pub use binding::{SlotBinding, SlotKind, SlotMut, SlotType, TableRecord};
pub use mapper::SlotPlan;
