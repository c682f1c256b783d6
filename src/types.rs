//! Core data model types.
//!
//! A [`Table`] is an ordered header list plus row-major [`Value`] storage. It is populated once
//! from a [`DataSource`] and then mutated in place by the transformations in
//! [`crate::processing`].

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::{EtlError, EtlResult};
use crate::ingestion::DataSource;
use crate::processing::MissingPattern;

/// A single cell in a [`Table`].
///
/// Cells are loaded as [`Value::Utf8`]; transformations replace them with the other variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Raw text, as read from the source.
    Utf8(String),
    /// 64-bit signed integer (boolean coercion, word-number conversion).
    Int64(i64),
    /// 64-bit float (currency scaling, decimal-comma conversion).
    Float64(f64),
    /// One-hot indicator list.
    OneHot(Vec<u8>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Utf8(_) => "text",
            Value::Int64(_) => "integer",
            Value::Float64(_) => "float",
            Value::OneHot(_) => "one-hot",
        }
    }

    /// Returns the text if this is a [`Value::Utf8`] cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Utf8(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Utf8(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Utf8(s) => f.write_str(s),
            Value::Int64(v) => write!(f, "{v}"),
            // Debug keeps the trailing ".0" on integral floats.
            Value::Float64(v) => write!(f, "{v:?}"),
            Value::OneHot(bits) => {
                f.write_str("[")?;
                for (i, b) in bits.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{b}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// In-memory table: ordered headers plus rows of [`Value`]s.
///
/// Columns are addressed by header name. Every row has the same number of cells.
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<Value>>,
    pub(crate) missing: MissingPattern,
}

impl Table {
    /// Create an empty table that will treat cells matching `missing` as missing values.
    pub fn new(missing: MissingPattern) -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            missing,
        }
    }

    /// Create a table from already-parsed headers and rows.
    ///
    /// When `headers` is non-empty every row must have the same length as it; otherwise all rows
    /// must share one length.
    pub fn from_parts(
        headers: Vec<String>,
        rows: Vec<Vec<Value>>,
        missing: MissingPattern,
    ) -> EtlResult<Self> {
        let expected = if headers.is_empty() {
            rows.first().map(Vec::len).unwrap_or(0)
        } else {
            headers.len()
        };
        if let Some(row) = rows.iter().find(|row| row.len() != expected) {
            return Err(EtlError::LengthMismatch {
                expected,
                actual: row.len(),
            });
        }
        Ok(Self {
            headers,
            rows,
            missing,
        })
    }

    /// Populate headers and rows from `source`.
    ///
    /// With `header_row = Some(i)` the `i`-th record becomes the header list and is excluded from
    /// the rows. With `None` the headers are left empty and every record is a row.
    /// Any previous contents are replaced.
    pub fn load<S>(&mut self, source: &S, header_row: Option<usize>) -> EtlResult<()>
    where
        S: DataSource + ?Sized,
    {
        let raw = source.read(header_row)?;
        self.headers = raw.headers.unwrap_or_default();
        self.rows = raw
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(Value::Utf8).collect())
            .collect();
        Ok(())
    }

    /// Header names, in column order. Empty when loaded without a header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Row-major cell storage.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of data rows (the header line is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The missing-value pattern used by [`Table::drop_missing`].
    pub fn missing_pattern(&self) -> &MissingPattern {
        &self.missing
    }

    /// Returns `[headers, row_1, row_2, ...]`, with headers rendered as text cells.
    pub fn matrix(&self) -> Vec<Vec<Value>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push(self.headers.iter().map(|h| Value::Utf8(h.clone())).collect());
        out.extend(self.rows.iter().cloned());
        out
    }

    /// Position of a column by name (first match wins).
    pub fn column_index(&self, name: &str) -> EtlResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| self.column_not_found(name))
    }

    /// Resolve several column names at once using a single name → position map.
    pub(crate) fn column_indices(&self, names: &[&str]) -> EtlResult<Vec<usize>> {
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(self.headers.len());
        for (idx, header) in self.headers.iter().enumerate() {
            positions.entry(header.as_str()).or_insert(idx);
        }
        names
            .iter()
            .map(|name| {
                positions
                    .get(name)
                    .copied()
                    .ok_or_else(|| self.column_not_found(name))
            })
            .collect()
    }

    fn column_not_found(&self, name: &str) -> EtlError {
        EtlError::ColumnNotFound {
            name: name.to_owned(),
            headers: self.headers.clone(),
        }
    }
}
