//! Builders for synthetic table files used by unit tests.

use crate::config::{ACTIVE_FLAG, DELETED_FLAG, FIELD_BLOCK_START, FIELD_DESCRIPTOR_SIZE};

pub(crate) struct FieldSpec {
    pub name: &'static [u8],
    pub tag: u8,
    pub length: u8,
    pub decimals: u8,
}

pub(crate) fn text(name: &'static str, length: u8) -> FieldSpec {
    FieldSpec {
        name: name.as_bytes(),
        tag: b'C',
        length,
        decimals: 0,
    }
}

pub(crate) fn numeric(name: &'static str, length: u8, decimals: u8) -> FieldSpec {
    FieldSpec {
        name: name.as_bytes(),
        tag: b'N',
        length,
        decimals,
    }
}

pub(crate) fn other(name: &'static str, tag: u8, length: u8) -> FieldSpec {
    FieldSpec {
        name: name.as_bytes(),
        tag,
        length,
        decimals: 0,
    }
}

pub(crate) struct TableFile {
    fields: Vec<FieldSpec>,
    rows: Vec<(u8, Vec<u8>)>,
    declared_count: Option<u32>,
    record_length: Option<u16>,
}

impl TableFile {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            rows: Vec::new(),
            declared_count: None,
            record_length: None,
        }
    }

    /// Appends a record; `values` are padded or cut to each field's width.
    pub fn row(mut self, values: &[&str]) -> Self {
        let data = self.pack(values);
        self.rows.push((ACTIVE_FLAG, data));
        self
    }

    pub fn deleted_row(mut self, values: &[&str]) -> Self {
        let data = self.pack(values);
        self.rows.push((DELETED_FLAG, data));
        self
    }

    /// Appends a record with an explicit flag byte and unpadded field data.
    pub fn raw_row(mut self, flag: u8, data: &[u8]) -> Self {
        self.rows.push((flag, data.to_vec()));
        self
    }

    pub fn declared_count(mut self, count: u32) -> Self {
        self.declared_count = Some(count);
        self
    }

    pub fn record_length(mut self, length: u16) -> Self {
        self.record_length = Some(length);
        self
    }

    pub fn header_length(&self) -> u16 {
        (FIELD_BLOCK_START + self.fields.len() * FIELD_DESCRIPTOR_SIZE + 1) as u16
    }

    fn data_length(&self) -> usize {
        self.fields.iter().map(|f| f.length as usize).sum()
    }

    fn pack(&self, values: &[&str]) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.data_length());
        for (column, value) in self.fields.iter().zip(values) {
            let mut cell = value.as_bytes().to_vec();
            cell.resize(column.length as usize, b' ');
            data.extend_from_slice(&cell);
        }
        data.resize(self.data_length(), b' ');
        data
    }

    pub fn build(&self) -> Vec<u8> {
        let record_length = self
            .record_length
            .unwrap_or((self.data_length() + 1) as u16);
        let count = self.declared_count.unwrap_or(self.rows.len() as u32);

        let mut bytes = vec![0u8; FIELD_BLOCK_START];
        bytes[0] = 0x03;
        bytes[1] = 124;
        bytes[2] = 6;
        bytes[3] = 1;
        bytes[4..8].copy_from_slice(&count.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.header_length().to_le_bytes());
        bytes[10..12].copy_from_slice(&record_length.to_le_bytes());

        for column in &self.fields {
            let mut block = [0u8; FIELD_DESCRIPTOR_SIZE];
            block[..column.name.len()].copy_from_slice(column.name);
            block[11] = column.tag;
            block[16] = column.length;
            block[17] = column.decimals;
            bytes.extend_from_slice(&block);
        }
        bytes.push(0x0D);

        for (flag, data) in &self.rows {
            bytes.push(*flag);
            bytes.extend_from_slice(data);
            let padding = (record_length as usize).saturating_sub(data.len() + 1);
            bytes.extend(std::iter::repeat(b' ').take(padding));
        }
        bytes
    }
}
