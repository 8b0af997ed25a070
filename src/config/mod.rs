//! # dbfkit Configuration Module
//!
//! This module centralizes the layout constants of the table file format.
//! Offsets into the header, descriptor blocks, and records are all derived
//! from these values; nothing else in the crate hardcodes a byte position.
//!
//! ## Module Organization
//!
//! - [`constants`]: Layout constants with dependency documentation

pub mod constants;
pub use constants::*;
