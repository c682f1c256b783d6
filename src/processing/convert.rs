//! Numeric conversions for [`crate::types::Table`].

use crate::error::{EtlError, EtlResult};
use crate::types::{Table, Value};

use super::numwords::words_to_number;

impl Table {
    /// Replace each cell of the named columns with the integer its number phrase spells out.
    ///
    /// Not transactional: cells converted before a failing cell stay converted.
    pub fn words_to_number(&mut self, names: &[&str]) -> EtlResult<()> {
        let idxs = self.column_indices(names)?;
        for (&name, idx) in names.iter().zip(idxs) {
            for (row_idx0, row) in self.rows.iter_mut().enumerate() {
                let number = match &row[idx] {
                    Value::Utf8(text) => words_to_number(text)?,
                    other => return Err(unexpected(row_idx0, name, other)),
                };
                row[idx] = Value::Int64(number);
            }
        }
        Ok(())
    }

    /// Divide each cell of the named columns by 1000, producing floats.
    pub fn cents_to_euros(&mut self, names: &[&str]) -> EtlResult<()> {
        let idxs = self.column_indices(names)?;
        for (&name, idx) in names.iter().zip(idxs) {
            for (row_idx0, row) in self.rows.iter_mut().enumerate() {
                let amount = match &row[idx] {
                    Value::Utf8(text) => {
                        text.trim()
                            .parse::<f64>()
                            .map_err(|e| EtlError::ParseError {
                                row: row_idx0 + 1,
                                column: name.to_owned(),
                                raw: text.clone(),
                                message: e.to_string(),
                            })?
                    }
                    Value::Int64(v) => *v as f64,
                    Value::Float64(v) => *v,
                    other => return Err(unexpected(row_idx0, name, other)),
                };
                row[idx] = Value::Float64(cents_to_euros(amount));
            }
        }
        Ok(())
    }

    /// Convert decimal-comma text cells (`"10,1"`) of the named columns to floats.
    ///
    /// Cells without a comma are left as they are. Cells with a comma that still do not parse
    /// are skipped silently; the number of skipped cells is returned.
    pub fn comma_to_float(&mut self, names: &[&str]) -> EtlResult<usize> {
        let idxs = self.column_indices(names)?;
        let mut skipped = 0;
        for idx in idxs {
            for row in &mut self.rows {
                let Value::Utf8(text) = &row[idx] else {
                    continue;
                };
                if !text.contains(',') {
                    continue;
                }
                match text.replace(',', ".").trim().parse::<f64>() {
                    Ok(v) => row[idx] = Value::Float64(v),
                    Err(_) => skipped += 1,
                }
            }
        }
        Ok(skipped)
    }
}

/// Scale an amount in cents to euros.
pub fn cents_to_euros(amount: f64) -> f64 {
    amount / 1000.0
}

fn unexpected(row_idx0: usize, column: &str, found: &Value) -> EtlError {
    EtlError::UnexpectedValue {
        row: row_idx0 + 1,
        column: column.to_owned(),
        message: format!("expected text, found {}", found.kind()),
    }
}
