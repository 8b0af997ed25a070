//! # Fixed-Width Numeric Parsing
//!
//! Numeric fields (`N` and `F`) hold right-aligned ASCII text padded with
//! spaces, e.g. `"    42"` or `"  3.1400"`. The declared decimal-place count
//! decides the target type:
//!
//! | Decimals | Result | Empty sentinel |
//! |----------|--------|----------------|
//! | 0 | `i64` | `"-"` → `0` |
//! | > 0 | `f64` | `"-.---"` → `0.0` |
//!
//! Sentinels are matched after trimming, so they apply at any field width.
//! Anything else that fails to parse is a parse error. A blank field is not a
//! sentinel and fails like any other malformed value.

use eyre::{bail, Result};

use crate::config::{EMPTY_DECIMAL_SENTINEL, EMPTY_INTEGER_SENTINEL};
use crate::error::TableError;

fn is_numeric_padding(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}

/// Trims ASCII whitespace, vertical tab included, from both ends of a
/// numeric field.
pub fn trim_numeric(raw: &[u8]) -> &[u8] {
    let Some(start) = raw.iter().position(|&b| !is_numeric_padding(b)) else {
        return &[];
    };
    let end = raw
        .iter()
        .rposition(|&b| !is_numeric_padding(b))
        .map_or(start, |i| i + 1);
    &raw[start..end]
}

pub fn parse_integer_field(raw: &[u8], field: &str) -> Result<i64> {
    let text = numeric_text(raw, field)?;
    if text == EMPTY_INTEGER_SENTINEL {
        return Ok(0);
    }
    match text.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => bail!(TableError::Parse {
            field: field.to_string(),
            text: text.to_string(),
            reason: e.to_string(),
        }),
    }
}

pub fn parse_decimal_field(raw: &[u8], field: &str) -> Result<f64> {
    let text = numeric_text(raw, field)?;
    if text == EMPTY_DECIMAL_SENTINEL {
        return Ok(0.0);
    }
    match text.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(e) => bail!(TableError::Parse {
            field: field.to_string(),
            text: text.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn numeric_text<'a>(raw: &'a [u8], field: &str) -> Result<&'a str> {
    let trimmed = trim_numeric(raw);
    match std::str::from_utf8(trimmed) {
        Ok(text) => Ok(text),
        Err(e) => bail!(TableError::Parse {
            field: field.to_string(),
            text: String::from_utf8_lossy(trimmed).into_owned(),
            reason: e.to_string(),
        }),
    }
}
