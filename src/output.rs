//! Writing a [`Table`] back out.
//!
//! Cells are rendered with their [`std::fmt::Display`] form (`15.0`, `[0, 1]`, ...). The header
//! line is written first unless the table has no headers.

use std::io::{self, Write};
use std::path::Path;

use crate::error::{EtlError, EtlResult};
use crate::types::Table;

/// Write `table` to `path` as delimiter-separated text.
pub fn write_delimited(table: &Table, path: impl AsRef<Path>, delimiter: u8) -> EtlResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;
    write_records(table, &mut wtr)?;
    wtr.flush()?;
    Ok(())
}

/// Render `table` as delimiter-separated text.
pub fn to_delimited_string(table: &Table, delimiter: u8) -> EtlResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    write_records(table, &mut wtr)?;
    let bytes = wtr.into_inner().map_err(|e| EtlError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| EtlError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Render `table.matrix()` as a JSON array of arrays.
pub fn to_json(table: &Table) -> EtlResult<String> {
    Ok(serde_json::to_string(&table.matrix())?)
}

fn write_records<W: Write>(table: &Table, wtr: &mut csv::Writer<W>) -> EtlResult<()> {
    if !table.headers().is_empty() {
        wtr.write_record(table.headers())?;
    }
    for row in table.rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    Ok(())
}
