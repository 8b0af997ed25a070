//! # Table Sources
//!
//! A table is always parsed from a fully owned byte buffer. Files are read in
//! one call and the handle is closed before parsing starts, so an open table
//! never pins a file descriptor.

use std::path::Path;

use eyre::{bail, Result};

use crate::error::TableError;

pub fn read_table_file(path: &Path) -> Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => {
            log::trace!("read {} bytes from {}", bytes.len(), path.display());
            Ok(bytes)
        }
        Err(source) => bail!(TableError::FileAccess {
            path: path.to_path_buf(),
            source,
        }),
    }
}
