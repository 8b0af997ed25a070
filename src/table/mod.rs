//! # Table
//!
//! The public entry point: a [`Table`] is opened once from a file or a byte
//! buffer and then answers record queries from any number of threads.
//!
//! - `handle`: Table, row access, batch decoding and mapping, Records iterator
//! - `builder`: TableBuilder and TableSource

pub mod builder;
pub mod handle;

pub use builder::{TableBuilder, TableSource};
pub use handle::{Records, Table};
