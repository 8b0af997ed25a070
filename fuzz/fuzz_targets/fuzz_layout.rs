//! Fuzz testing for structurally valid layouts with arbitrary content.
//!
//! Builds a well-formed header and descriptor array from fuzzer-chosen
//! columns, then fills records with arbitrary bytes so the numeric and text
//! decoders see every kind of malformed cell.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use dbfkit::{dbf_record, SharedDecoder, Table};

#[derive(Debug, Arbitrary)]
struct LayoutInput {
    columns: Vec<FuzzColumn>,
    record_slack: u8,
    declared_extra: u8,
    use_decoder: bool,
    payload: Vec<u8>,
}

#[derive(Debug, Arbitrary)]
struct FuzzColumn {
    name: [u8; 10],
    kind: FuzzKind,
    length: u8,
    decimals: u8,
}

#[derive(Debug, Arbitrary, Clone, Copy)]
enum FuzzKind {
    Character,
    Numeric,
    Float,
    Date,
    Logical,
}

impl FuzzKind {
    fn tag(self) -> u8 {
        match self {
            FuzzKind::Character => b'C',
            FuzzKind::Numeric => b'N',
            FuzzKind::Float => b'F',
            FuzzKind::Date => b'D',
            FuzzKind::Logical => b'L',
        }
    }
}

dbf_record! {
    struct Probe {
        #[dbf = "A"]
        a: String,
        #[dbf = "B"]
        b: i64,
        #[dbf = "C"]
        c: f64,
    }
}

fuzz_target!(|input: LayoutInput| {
    let columns = &input.columns[..input.columns.len().min(32)];
    let data_length: usize = columns.iter().map(|c| c.length as usize).sum();
    let record_length = data_length + 1 + input.record_slack as usize;
    if record_length > u16::MAX as usize {
        return;
    }
    let header_length = 32 + 32 * columns.len() + 1;

    let mut bytes = vec![0u8; 32];
    bytes[0] = 0x03;
    let rows = input.payload.len() / record_length;
    let declared = rows as u32 + input.declared_extra as u32;
    bytes[4..8].copy_from_slice(&declared.to_le_bytes());
    bytes[8..10].copy_from_slice(&(header_length as u16).to_le_bytes());
    bytes[10..12].copy_from_slice(&(record_length as u16).to_le_bytes());

    for column in columns {
        let mut block = [0u8; 32];
        block[..10].copy_from_slice(&column.name);
        block[11] = column.kind.tag();
        block[16] = column.length;
        block[17] = column.decimals;
        bytes.extend_from_slice(&block);
    }
    bytes.push(0x0D);
    bytes.extend_from_slice(&input.payload);

    let decoder: Option<SharedDecoder> = if input.use_decoder {
        Some(std::sync::Arc::new(|raw: &[u8]| -> eyre::Result<Vec<u8>> {
            if raw.first() == Some(&0xFF) {
                eyre::bail!("rejected lead byte");
            }
            Ok(raw.to_vec())
        }))
    } else {
        None
    };

    let table = match Table::from_bytes(bytes, decoder) {
        Ok(table) => table,
        Err(_) => return,
    };

    let _ = table.get_all_records();
    for record in table.records().take(256) {
        let _ = record;
    }
    let _ = table.map_to::<Probe>();
});
