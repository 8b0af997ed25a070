//! # Table Handle
//!
//! `Table` owns the complete file buffer together with the parsed header and
//! schema. Everything after construction is a read-only view over that
//! buffer: nothing is cached, nothing is mutated, and the handle is
//! `Send + Sync` so one table can serve any number of reader threads.
//!
//! ## Opening
//!
//! ```text
//! open(path) ──> read_table_file ──┐
//!                                  v
//! from_bytes(bytes) ──────> Header::parse ──> TableSchema::parse ──> check_record_length
//!                                                (decoder on names)
//! ```
//!
//! Construction fails with a format error when the header is shorter than 12
//! bytes, the header length is below 33, a descriptor block runs past the
//! buffer, or the field widths do not fit in the declared record length.
//!
//! ## Row Access
//!
//! | Row | Buffer | Result |
//! |-----|--------|--------|
//! | `row >= record_count()` | any | range error (`RowOutOfRange`) |
//! | in range | record extends past the buffer | range error (`Truncated`) |
//! | in range | record fully present | decoded record |
//!
//! Batch operations (`get_all_records`, `map_into`, `map_to`) stop at the
//! first failing row and return no partial result.

use std::path::Path;

use eyre::{bail, Result, WrapErr};

use super::builder::TableBuilder;
use crate::encoding::{SharedDecoder, TextDecoder};
use crate::error::TableError;
use crate::mapping::{SlotPlan, TableRecord};
use crate::records::{decode_record, DecodedRecord, RecordView};
use crate::schema::{Field, TableSchema};
use crate::storage::{read_table_file, Header};

pub struct Table {
    bytes: Vec<u8>,
    header: Header,
    schema: TableSchema,
    decoder: Option<SharedDecoder>,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("len", &self.bytes.len())
            .field("header", &self.header)
            .field("schema", &self.schema)
            .field("decoder", &self.decoder.is_some())
            .finish()
    }
}

impl Table {
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Reads the whole file at `path` and parses it.
    pub fn open<P: AsRef<Path>>(path: P, decoder: Option<SharedDecoder>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = read_table_file(path)?;
        let table = Self::from_bytes(bytes, decoder)?;
        log::debug!("opened table {}", path.display());
        Ok(table)
    }

    pub fn from_bytes(bytes: Vec<u8>, decoder: Option<SharedDecoder>) -> Result<Self> {
        let header = Header::parse(&bytes)?;
        let schema = TableSchema::parse(&bytes, &header, decoder.as_deref())?;
        schema.check_record_length(&header)?;

        log::debug!(
            "table loaded: {} records, {} fields, header length {}, record length {}, {} bytes",
            header.record_count(),
            schema.field_count(),
            header.header_length(),
            header.record_length(),
            bytes.len()
        );
        if bytes.len() < header.records_end() {
            log::debug!(
                "buffer holds {} bytes but {} records need {}; trailing rows are unreadable",
                bytes.len(),
                header.record_count(),
                header.records_end()
            );
        }

        Ok(Self {
            bytes,
            header,
            schema,
            decoder,
        })
    }

    /// The record count declared in the header.
    pub fn record_count(&self) -> u32 {
        self.header.record_count()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn fields(&self) -> &[Field] {
        self.schema.fields()
    }

    /// First field named exactly `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.schema.find(name)
    }

    fn decoder(&self) -> Option<&dyn TextDecoder> {
        self.decoder.as_deref()
    }

    /// Borrows the raw bytes of `row` without decoding them.
    pub fn record_view(&self, row: usize) -> Result<RecordView<'_>> {
        let record_count = self.header.record_count();
        if row >= record_count as usize {
            bail!(TableError::RowOutOfRange { row, record_count });
        }

        let start = self.header.record_offset(row);
        let end = start + self.header.record_length() as usize;
        if end > self.bytes.len() {
            bail!(TableError::Truncated {
                row,
                required: end,
                available: self.bytes.len(),
            });
        }

        RecordView::new(&self.bytes[start..end], &self.schema)
    }

    pub fn get_record(&self, row: usize) -> Result<DecodedRecord> {
        let view = self.record_view(row)?;
        decode_record(&view, self.decoder()).wrap_err_with(|| format!("failed to decode row {}", row))
    }

    pub fn get_all_records(&self) -> Result<Vec<DecodedRecord>> {
        self.records().collect()
    }

    /// Lazily decodes every row in order.
    pub fn records(&self) -> Records<'_> {
        Records {
            table: self,
            row: 0,
            end: self.record_count() as usize,
        }
    }

    /// Replaces `out` with one `T` per declared record.
    ///
    /// `out` is left untouched when any row fails.
    pub fn map_into<T: TableRecord>(&self, out: &mut Vec<T>) -> Result<()> {
        *out = self.map_to()?;
        Ok(())
    }

    pub fn map_to<T: TableRecord>(&self) -> Result<Vec<T>> {
        let plan = SlotPlan::resolve::<T>(&self.schema)?;
        let count = self.record_count() as usize;
        let mut items = Vec::with_capacity(count);

        for row in 0..count {
            let view = self.record_view(row)?;
            let mut item = T::default();
            plan.apply(&view, self.decoder(), &mut item)
                .wrap_err_with(|| format!("failed to map row {}", row))?;
            items.push(item);
        }

        log::trace!(
            "mapped {} records through {} bound slots",
            items.len(),
            plan.planned_count()
        );
        Ok(items)
    }
}

/// Iterator returned by [`Table::records`].
pub struct Records<'t> {
    table: &'t Table,
    row: usize,
    end: usize,
}

impl Iterator for Records<'_> {
    type Item = Result<DecodedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.end {
            return None;
        }
        let row = self.row;
        self.row += 1;
        Some(self.table.get_record(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Records<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{error_kind, ErrorKind};
    use crate::records::FieldValue;
    use crate::test_support::{numeric, other, text, TableFile};

    fn name_qty() -> TableFile {
        TableFile::new(vec![text("NAME", 10), numeric("QTY", 8, 0)])
    }

    fn open(file: &TableFile) -> Table {
        Table::from_bytes(file.build(), None).unwrap()
    }

    #[test]
    fn table_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Table>();
    }

    #[test]
    fn decodes_reference_record() {
        let file = name_qty().raw_row(b' ', b"JohnDoe\0\0\0   42   ");
        let table = open(&file);

        assert_eq!(table.record_count(), 1);
        assert_eq!(table.header().record_length(), 19);

        let record = table.get_record(0).unwrap();
        assert!(!record.is_deleted());
        assert_eq!(record.text("NAME"), Some("JohnDoe"));
        assert_eq!(record.int("QTY"), Some(42));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn schema_introspection() {
        let table = open(&TableFile::new(vec![
            text("NAME", 10),
            numeric("QTY", 8, 0),
            numeric("PRICE", 9, 3),
            other("BORN", b'D', 8),
        ]));

        let names: Vec<&str> = table.fields().iter().map(Field::name).collect();
        assert_eq!(names, ["NAME", "QTY", "PRICE", "BORN"]);

        let price = table.field("PRICE").unwrap();
        assert_eq!(price.offset(), 18);
        assert_eq!(price.decimal_count(), 3);
        assert!(table.field("MISSING").is_none());
        assert_eq!(table.header().field_count().unwrap(), 4);
    }

    #[test]
    fn row_at_count_is_out_of_range() {
        let table = open(&name_qty().row(&["Ann", "1"]).row(&["Bob", "2"]));

        assert!(table.get_record(1).is_ok());
        for row in [2usize, 3, usize::MAX] {
            let err = table.get_record(row).unwrap_err();
            assert_eq!(error_kind(&err), Some(ErrorKind::Range));
        }
    }

    #[test]
    fn declared_count_beyond_buffer_is_truncated() {
        let table = open(&name_qty().row(&["Ann", "1"]).declared_count(3));

        assert_eq!(table.record_count(), 3);
        assert!(table.get_record(0).is_ok());

        let err = table.get_record(1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TableError>(),
            Some(TableError::Truncated { row: 1, .. })
        ));
        assert!(table.get_all_records().is_err());
    }

    #[test]
    fn last_record_needs_its_full_length() {
        let mut bytes = name_qty().row(&["Ann", "1"]).build();
        bytes.pop();
        let table = Table::from_bytes(bytes, None).unwrap();

        let err = table.get_record(0).unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::Range));
    }

    #[test]
    fn get_all_records_in_row_order() {
        let table = open(
            &name_qty()
                .row(&["Ann", "1"])
                .deleted_row(&["Bob", "2"])
                .row(&["Cy", "-"]),
        );

        let records = table.get_all_records().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].int("QTY"), Some(1));
        assert!(records[1].is_deleted());
        assert_eq!(records[1].int("QTY"), Some(2));
        assert_eq!(records[2].int("QTY"), Some(0));
    }

    #[test]
    fn first_failing_row_aborts_batch() {
        let table = open(
            &name_qty()
                .row(&["Ann", "1"])
                .row(&["Bob", "x"])
                .row(&["Cy", "3"]),
        );

        let err = table.get_all_records().unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::Parse));
        assert!(format!("{:#}", err).contains("row 1"));
    }

    #[test]
    fn records_iterator_is_lazy_and_sized() {
        let table = open(
            &name_qty()
                .row(&["Ann", "1"])
                .row(&["Bob", "x"])
                .row(&["Cy", "3"]),
        );

        let mut records = table.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records.next().unwrap().unwrap().text("NAME"), Some("Ann       "));
        assert!(records.next().unwrap().is_err());
        assert_eq!(records.next().unwrap().unwrap().int("QTY"), Some(3));
        assert!(records.next().is_none());
    }

    #[test]
    fn empty_table_has_no_records() {
        let table = open(&name_qty());

        assert_eq!(table.record_count(), 0);
        assert!(table.get_all_records().unwrap().is_empty());
        assert_eq!(
            error_kind(&table.get_record(0).unwrap_err()),
            Some(ErrorKind::Range)
        );
    }

    #[test]
    fn record_view_exposes_raw_bytes() {
        let table = open(&name_qty().deleted_row(&["Ann", "7"]));

        let view = table.record_view(0).unwrap();
        assert!(view.is_deleted());
        assert_eq!(view.field_bytes_by_name("QTY").unwrap(), b"7       ");
    }

    #[test]
    fn oversized_record_length_is_allowed() {
        let table = open(&name_qty().record_length(25).row(&["Ann", "5"]));

        assert_eq!(table.get_record(0).unwrap().int("QTY"), Some(5));
    }

    #[test]
    fn undersized_record_length_is_format_error() {
        let err = Table::from_bytes(name_qty().record_length(18).build(), None).unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::Format));
    }

    #[test]
    fn short_header_is_format_error() {
        let err = Table::from_bytes(vec![0x03, 124, 1], None).unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::Format));
    }

    #[test]
    fn decoder_applies_to_names_and_text() {
        let upper: SharedDecoder =
            std::sync::Arc::new(|raw: &[u8]| -> Result<Vec<u8>> { Ok(raw.to_ascii_uppercase()) });
        let file = TableFile::new(vec![text("name", 4)]).row(&["ann"]);
        let table = Table::from_bytes(file.build(), Some(upper)).unwrap();

        assert!(table.field("NAME").is_some());
        assert_eq!(
            table.get_record(0).unwrap().get("NAME"),
            Some(&FieldValue::Text("ANN ".to_string()))
        );
    }

    #[test]
    fn decoder_failure_on_field_name_fails_open() {
        let failing: SharedDecoder =
            std::sync::Arc::new(|_: &[u8]| -> Result<Vec<u8>> { Err(eyre::eyre!("bad bytes")) });
        let err = Table::from_bytes(name_qty().build(), Some(failing)).unwrap_err();

        assert_eq!(error_kind(&err), Some(ErrorKind::Decode));
    }

    #[test]
    fn get_record_is_idempotent() {
        let table = open(&name_qty().row(&["Ann", "1"]));
        assert_eq!(table.get_record(0).unwrap(), table.get_record(0).unwrap());
    }
}
