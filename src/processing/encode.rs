//! Categorical encodings for [`crate::types::Table`]: unique values, one-hot, boolean.

use crate::error::{EtlError, EtlResult};
use crate::types::{Table, Value};

use super::utils::{index_of_first_match, replace_positional, unique_values};

impl Table {
    /// For each named column, its distinct values in first-occurrence order.
    pub fn unique_values(&self, names: &[&str]) -> EtlResult<Vec<(String, Vec<Value>)>> {
        let idxs = self.column_indices(names)?;
        Ok(names
            .iter()
            .zip(idxs)
            .map(|(&name, idx)| {
                let column: Vec<Value> = self.rows.iter().map(|row| row[idx].clone()).collect();
                (name.to_owned(), unique_values(&column))
            })
            .collect())
    }

    /// Replace each named column with one-hot indicator lists.
    ///
    /// The indicator for a row has one slot per unique value of the column. The slot set to 1 is
    /// the first unique value (in first-occurrence order) found *anywhere in the row*, not only in
    /// the column's own cell; if none is found the indicator is all zeros. Every column is
    /// encoded from the rows as they were before this call.
    pub fn to_one_hot(&mut self, names: &[&str]) -> EtlResult<()> {
        let idxs = self.column_indices(names)?;
        let mut encodings = Vec::with_capacity(names.len());
        for ((_, uniques), idx) in self.unique_values(names)?.into_iter().zip(idxs) {
            let encoded: Vec<Value> = self
                .rows
                .iter()
                .map(|row| Value::OneHot(indicator(&uniques, row)))
                .collect();
            encodings.push((idx, encoded));
        }
        for (idx, encoded) in encodings {
            replace_positional(&mut self.rows, encoded, idx)?;
        }
        Ok(())
    }

    /// Coerce each named column to `1`/`0` by case-insensitive comparison with its truthy token.
    ///
    /// `names` and `truthy` are paired by position and must have the same length.
    pub fn to_boolean(&mut self, names: &[&str], truthy: &[&str]) -> EtlResult<()> {
        if names.len() != truthy.len() {
            return Err(EtlError::LengthMismatch {
                expected: names.len(),
                actual: truthy.len(),
            });
        }
        let idxs = self.column_indices(names)?;
        for ((&name, idx), token) in names.iter().zip(idxs).zip(truthy) {
            let token = token.to_lowercase();
            for (row_idx0, row) in self.rows.iter_mut().enumerate() {
                let hit = match &row[idx] {
                    Value::Utf8(text) => text.to_lowercase() == token,
                    other => {
                        return Err(EtlError::UnexpectedValue {
                            row: row_idx0 + 1,
                            column: name.to_owned(),
                            message: format!("expected text, found {}", other.kind()),
                        });
                    }
                };
                row[idx] = Value::Int64(i64::from(hit));
            }
        }
        Ok(())
    }
}

fn indicator(uniques: &[Value], row: &[Value]) -> Vec<u8> {
    let mut bits = vec![0; uniques.len()];
    if let Some(hit) = index_of_first_match(uniques, row) {
        bits[hit] = 1;
    }
    bits
}

#[cfg(test)]
mod tests {
    use crate::error::EtlError;
    use crate::processing::MissingPattern;
    use crate::types::{Table, Value};

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_parts(
            headers.iter().map(|&h| h.to_owned()).collect(),
            rows.iter().map(|r| r.iter().map(|&c| Value::from(c)).collect()).collect(),
            MissingPattern::literal("-").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn unique_values_per_column() {
        let t = table(
            &["class", "flag"],
            &[&["B", "yes"], &["A", "no"], &["B", "yes"]],
        );
        let uniques = t.unique_values(&["class", "flag"]).unwrap();
        assert_eq!(uniques[0].0, "class");
        assert_eq!(uniques[0].1, vec![Value::from("B"), Value::from("A")]);
        assert_eq!(uniques[1].1, vec![Value::from("yes"), Value::from("no")]);
    }

    #[test]
    fn one_hot_replaces_cells_with_indicators() {
        let mut t = table(&["id", "class"], &[&["1", "B"], &["2", "C"], &["3", "B"]]);
        t.to_one_hot(&["class"]).unwrap();
        assert_eq!(t.rows()[0][1], Value::OneHot(vec![1, 0]));
        assert_eq!(t.rows()[1][1], Value::OneHot(vec![0, 1]));
        assert_eq!(t.rows()[2][1], Value::OneHot(vec![1, 0]));
        assert_eq!(t.rows()[0][0], Value::from("1"));
    }

    #[test]
    fn one_hot_matches_against_the_whole_row() {
        // Row 2 holds "A" in the class column but also "B" elsewhere; "B" comes first in the
        // unique list, so it wins.
        let mut t = table(&["class", "other"], &[&["B", "x"], &["A", "B"]]);
        t.to_one_hot(&["class"]).unwrap();
        assert_eq!(t.rows()[1][0], Value::OneHot(vec![1, 0]));
    }

    #[test]
    fn one_hot_columns_are_encoded_independently() {
        let mut t = table(&["a", "b"], &[&["x", "y"], &["z", "w"]]);
        t.to_one_hot(&["a", "b"]).unwrap();
        for row in t.rows() {
            for cell in row {
                match cell {
                    Value::OneHot(bits) => {
                        assert_eq!(bits.len(), 2);
                        assert!(bits.iter().map(|&b| u32::from(b)).sum::<u32>() <= 1);
                    }
                    other => panic!("expected one-hot, got {other:?}"),
                }
            }
        }
        assert_eq!(t.rows()[1][1], Value::OneHot(vec![0, 1]));
    }

    #[test]
    fn boolean_is_case_insensitive() {
        let mut t = table(&["aspiration"], &[&["Turbo"], &["std"], &["turbo"]]);
        t.to_boolean(&["aspiration"], &["TURBO"]).unwrap();
        let got: Vec<_> = t.rows().iter().map(|r| r[0].clone()).collect();
        assert_eq!(got, vec![Value::Int64(1), Value::Int64(0), Value::Int64(1)]);
    }

    #[test]
    fn boolean_requires_one_token_per_column() {
        let mut t = table(&["a", "b"], &[&["yes", "no"]]);
        let err = t.to_boolean(&["a", "b"], &["yes"]).unwrap_err();
        assert!(matches!(
            err,
            EtlError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        ));
        assert_eq!(t.rows()[0][0], Value::from("yes"));
    }

    #[test]
    fn boolean_rejects_already_converted_cells() {
        let mut t = table(&["a"], &[&["yes"]]);
        t.to_boolean(&["a"], &["yes"]).unwrap();
        let err = t.to_boolean(&["a"], &["yes"]).unwrap_err();
        assert!(matches!(err, EtlError::UnexpectedValue { row: 1, .. }));
    }
}
