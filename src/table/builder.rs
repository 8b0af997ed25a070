//! # Table Builder
//!
//! Fluent configuration for opening a [`Table`]: choose a source (a path on
//! disk or an in-memory buffer), optionally attach a text decoder, then call
//! `open()`.
//!
//! ```ignore
//! let table = Table::builder()
//!     .path("quotes.dbf")
//!     .decoder(Latin1Decoder)
//!     .open()?;
//!
//! let table = Table::builder().bytes(buffer).open()?;
//! ```
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | source | none (required) | `path()` or `bytes()`; the last call wins |
//! | decoder | pass-through | applied to field names and text fields |

use std::path::PathBuf;
use std::sync::Arc;

use eyre::{bail, Result};

use super::handle::Table;
use crate::encoding::{SharedDecoder, TextDecoder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

#[derive(Default)]
pub struct TableBuilder {
    source: Option<TableSource>,
    decoder: Option<SharedDecoder>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = Some(TableSource::Path(path.into()));
        self
    }

    pub fn bytes(mut self, bytes: Vec<u8>) -> Self {
        self.source = Some(TableSource::Bytes(bytes));
        self
    }

    pub fn decoder<D: TextDecoder + 'static>(mut self, decoder: D) -> Self {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    /// Attaches a decoder already shared with other tables.
    pub fn shared_decoder(mut self, decoder: SharedDecoder) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn get_source(&self) -> Option<&TableSource> {
        self.source.as_ref()
    }

    pub fn has_decoder(&self) -> bool {
        self.decoder.is_some()
    }

    pub fn open(self) -> Result<Table> {
        match self.source {
            Some(TableSource::Path(path)) => Table::open(path, self.decoder),
            Some(TableSource::Bytes(bytes)) => Table::from_bytes(bytes, self.decoder),
            None => bail!("table source not specified: call path() or bytes() before open()"),
        }
    }
}
