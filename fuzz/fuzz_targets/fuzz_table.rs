//! Fuzz testing for table opening and record decoding.
//!
//! Feeds arbitrary bytes to `Table::from_bytes` and, when the header is
//! accepted, decodes every declared row. Any outcome is fine except a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use dbfkit::Table;

fuzz_target!(|data: &[u8]| {
    let Ok(table) = Table::from_bytes(data.to_vec(), None) else {
        return;
    };

    let count = (table.record_count() as usize).min(4096);
    for row in 0..count {
        if let Ok(view) = table.record_view(row) {
            let _ = view.is_deleted();
        }
        let _ = table.get_record(row);
    }
    let _ = table.get_record(table.record_count() as usize);
});
