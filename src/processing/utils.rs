//! List and matrix helpers shared by the table transformations.

use crate::error::{EtlError, EtlResult};
use crate::types::Value;

use super::missing::MissingPattern;

/// Distinct values of `values`, in first-occurrence order.
pub fn unique_values<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for v in values {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}

/// Index within `short` of the first element of `short` that also occurs anywhere in `long`.
pub fn index_of_first_match<T: PartialEq>(short: &[T], long: &[T]) -> Option<usize> {
    short.iter().position(|candidate| long.contains(candidate))
}

/// Overwrite `rows[i][index]` with `replacements[i]` for every row.
///
/// Fails without writing anything if the lengths differ or a row is too short for `index`.
pub fn replace_positional<T>(
    rows: &mut [Vec<T>],
    replacements: Vec<T>,
    index: usize,
) -> EtlResult<()> {
    if rows.len() != replacements.len() {
        return Err(EtlError::LengthMismatch {
            expected: rows.len(),
            actual: replacements.len(),
        });
    }
    if let Some(row) = rows.iter().find(|row| row.len() <= index) {
        return Err(EtlError::LengthMismatch {
            expected: index + 1,
            actual: row.len(),
        });
    }
    for (row, value) in rows.iter_mut().zip(replacements) {
        row[index] = value;
    }
    Ok(())
}

/// Strip line-terminator characters from a raw field.
pub fn clean_text(raw: &str) -> String {
    raw.replace(['\r', '\n'], "")
}

/// Whether any text cell in `row` matches `pattern`. Non-text cells never count as missing.
pub fn contains_missing(pattern: &MissingPattern, row: &[Value]) -> bool {
    row.iter()
        .filter_map(Value::as_str)
        .any(|text| pattern.is_match(text))
}
