use std::fs::File;
use std::io::{self, BufWriter, Write};

use bstr::ByteSlice;

use crate::array::DynamicArray;

/// Write every record followed by `delimiter`
pub fn write_records<W: Write>(
    writer: W,
    records: &DynamicArray<Vec<u8>>,
    delimiter: u8,
) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for record in records {
        log::trace!("emit {:?}", record.as_bstr());
        writer.write_all(record)?;
        writer.write_all(&[delimiter])?;
    }
    writer.flush()
}

/// One-line summary of the array's storage, used by `--stats`
pub fn write_stats<W: Write, T>(mut writer: W, records: &DynamicArray<T>) -> io::Result<()> {
    writeln!(
        writer,
        "dynsort: {} records, capacity {}",
        records.len(),
        records.capacity()
    )
}

/// Open output file or return stdout
pub fn open_output(path: Option<&str>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout())),
    }
}
