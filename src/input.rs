use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::array::DynamicArray;

/// Read delimiter-separated records into a fresh array.
///
/// The delimiter is stripped. A final record without a trailing delimiter
/// is still returned.
pub fn read_records<R: BufRead>(mut reader: R, delimiter: u8) -> io::Result<DynamicArray<Vec<u8>>> {
    let mut records = DynamicArray::new();
    loop {
        let mut record = Vec::new();
        if reader.read_until(delimiter, &mut record)? == 0 {
            break;
        }
        if record.last() == Some(&delimiter) {
            record.pop();
        }
        records.push_back(record);
    }
    log::debug!(
        "read {} records (capacity {})",
        records.len(),
        records.capacity()
    );
    Ok(records)
}

/// Open a named input, treating "-" as stdin
pub fn open_input(path: &str) -> io::Result<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(BufReader::new(io::stdin().lock())))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}
