//! # dbfkit Layout Constants
//!
//! This module centralizes every byte-level constant of the table file layout.
//! Values that depend on each other are co-located and their relationships are
//! enforced through compile-time assertions, so a change to one cannot silently
//! misalign the others.
//!
//! ## Dependency Graph
//!
//! ```text
//! HEADER_PREFIX_SIZE (12 bytes)
//!       │  signature, update date, record count, header length, record length
//!       │
//!       └─> FIELD_BLOCK_START (32, must be >= HEADER_PREFIX_SIZE)
//!             Descriptors begin after the full 32-byte file header
//!
//! FIELD_DESCRIPTOR_SIZE (32 bytes)
//!       │
//!       ├─> FIELD_NAME_WIDTH (10, name bytes read from each descriptor)
//!       │
//!       └─> MIN_HEADER_LENGTH (FIELD_BLOCK_START + HEADER_TERMINATOR_SIZE)
//!             field_count = (header_length - MIN_HEADER_LENGTH) / FIELD_DESCRIPTOR_SIZE
//!
//! DELETION_FLAG_SIZE (1 byte)
//!       │
//!       └─> Field offsets are relative to the byte after the flag, so the
//!           field lengths must sum to at most record_length - DELETION_FLAG_SIZE
//! ```
//!
//! ## Critical Invariants
//!
//! 1. `FIELD_BLOCK_START >= HEADER_PREFIX_SIZE` (descriptors never overlap the prefix)
//! 2. `FIELD_NAME_WIDTH < FIELD_DESCRIPTOR_SIZE` (name lives inside its block)
//! 3. `MIN_HEADER_LENGTH == FIELD_BLOCK_START + HEADER_TERMINATOR_SIZE`

// ============================================================================
// FILE HEADER
// ============================================================================

/// Bytes of the file header that carry decoded metadata.
pub const HEADER_PREFIX_SIZE: usize = 12;

/// Offset of the first field descriptor block.
pub const FIELD_BLOCK_START: usize = 32;

/// The descriptor array is closed by a single terminator byte (0x0D).
pub const HEADER_TERMINATOR_SIZE: usize = 1;

/// Smallest header length for which the field count formula is defined.
pub const MIN_HEADER_LENGTH: usize = FIELD_BLOCK_START + HEADER_TERMINATOR_SIZE;

/// Update date years are stored as an offset from this base.
pub const UPDATE_YEAR_BASE: u16 = 1900;

const _: () = assert!(
    FIELD_BLOCK_START >= HEADER_PREFIX_SIZE,
    "field descriptors must start after the header prefix"
);

const _: () = assert!(
    MIN_HEADER_LENGTH == FIELD_BLOCK_START + HEADER_TERMINATOR_SIZE,
    "MIN_HEADER_LENGTH derivation mismatch"
);

// ============================================================================
// FIELD DESCRIPTORS
// ============================================================================

/// Size of one field descriptor block.
pub const FIELD_DESCRIPTOR_SIZE: usize = 32;

/// Number of leading descriptor bytes holding the zero-padded field name.
pub const FIELD_NAME_WIDTH: usize = 10;

const _: () = assert!(
    FIELD_NAME_WIDTH < FIELD_DESCRIPTOR_SIZE,
    "field name must fit inside its descriptor block"
);

/// Type tag for fixed-width character data.
pub const TYPE_CHARACTER: u8 = b'C';

/// Type tag for ASCII numeric data.
pub const TYPE_NUMERIC: u8 = b'N';

/// Type tag for ASCII floating point data (decoded like `N`).
pub const TYPE_FLOAT: u8 = b'F';

// ============================================================================
// RECORDS
// ============================================================================

/// Every record starts with a one-byte deletion flag.
pub const DELETION_FLAG_SIZE: usize = 1;

/// Flag value marking a record as deleted. Any other value means active.
pub const DELETED_FLAG: u8 = b'*';

/// Flag value written for active records.
pub const ACTIVE_FLAG: u8 = b' ';

/// Placeholder stored in an empty integer field.
pub const EMPTY_INTEGER_SENTINEL: &str = "-";

/// Placeholder stored in an empty decimal field.
pub const EMPTY_DECIMAL_SENTINEL: &str = "-.---";
