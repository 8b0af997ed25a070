//! Shared fixture writer for integration tests.
//!
//! Produces byte-exact table files: 32-byte header, one 32-byte descriptor
//! per column, a 0x0D terminator, then fixed-width records.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub struct Column {
    pub name: &'static str,
    pub tag: u8,
    pub length: u8,
    pub decimals: u8,
}

pub fn character(name: &'static str, length: u8) -> Column {
    Column {
        name,
        tag: b'C',
        length,
        decimals: 0,
    }
}

pub fn numeric(name: &'static str, length: u8, decimals: u8) -> Column {
    Column {
        name,
        tag: b'N',
        length,
        decimals,
    }
}

pub fn float(name: &'static str, length: u8, decimals: u8) -> Column {
    Column {
        name,
        tag: b'F',
        length,
        decimals,
    }
}

pub fn typed(name: &'static str, tag: u8, length: u8) -> Column {
    Column {
        name,
        tag,
        length,
        decimals: 0,
    }
}

pub struct Fixture {
    columns: Vec<Column>,
    records: Vec<Vec<u8>>,
    declared_count: Option<u32>,
}

impl Fixture {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            records: Vec::new(),
            declared_count: None,
        }
    }

    /// Active record; each value is space-padded to its column width.
    pub fn row(self, values: &[&str]) -> Self {
        self.flagged(b' ', values)
    }

    pub fn deleted(self, values: &[&str]) -> Self {
        self.flagged(b'*', values)
    }

    /// Record with exact field bytes, which must fill the record.
    pub fn raw(mut self, flag: u8, data: &[u8]) -> Self {
        assert_eq!(data.len(), self.data_length(), "raw record width");
        let mut record = vec![flag];
        record.extend_from_slice(data);
        self.records.push(record);
        self
    }

    pub fn declared_count(mut self, count: u32) -> Self {
        self.declared_count = Some(count);
        self
    }

    fn flagged(mut self, flag: u8, values: &[&str]) -> Self {
        let mut record = vec![flag];
        for (column, value) in self.columns.iter().zip(values) {
            let mut cell = value.as_bytes().to_vec();
            assert!(cell.len() <= column.length as usize, "value too wide");
            cell.resize(column.length as usize, b' ');
            record.extend_from_slice(&cell);
        }
        record.resize(self.record_length(), b' ');
        self.records.push(record);
        self
    }

    pub fn data_length(&self) -> usize {
        self.columns.iter().map(|c| c.length as usize).sum()
    }

    pub fn record_length(&self) -> usize {
        self.data_length() + 1
    }

    pub fn header_length(&self) -> usize {
        32 + 32 * self.columns.len() + 1
    }

    pub fn bytes(&self) -> Vec<u8> {
        let count = self.declared_count.unwrap_or(self.records.len() as u32);

        let mut out = vec![0u8; 32];
        out[0] = 0x03;
        out[1] = 103;
        out[2] = 11;
        out[3] = 28;
        out[4..8].copy_from_slice(&count.to_le_bytes());
        out[8..10].copy_from_slice(&(self.header_length() as u16).to_le_bytes());
        out[10..12].copy_from_slice(&(self.record_length() as u16).to_le_bytes());

        for column in &self.columns {
            let mut block = [0u8; 32];
            block[..column.name.len()].copy_from_slice(column.name.as_bytes());
            block[11] = column.tag;
            block[16] = column.length;
            block[17] = column.decimals;
            out.extend_from_slice(&block);
        }
        out.push(0x0D);

        for record in &self.records {
            out.extend_from_slice(record);
        }
        out
    }

    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.bytes()).unwrap();
        path
    }
}

/// The quote table used across tests: name, previous close, volume.
pub fn quotes() -> Fixture {
    Fixture::new(vec![
        character("HQZQDM", 6),
        character("HQZQJC", 8),
        numeric("HQZRSP", 8, 3),
        numeric("HQCJSL", 10, 0),
    ])
    .row(&["600000", "PFYH", "12.340", "1500"])
    .row(&["600001", "HDGS", "-.---", "-"])
    .deleted(&["600002", "DELIST", "0.500", "7"])
    .row(&["600003", "ZGGM", "3.100", "123456789"])
}
