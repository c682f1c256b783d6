//! Column selection and missing-row removal for [`crate::types::Table`].

use crate::error::EtlResult;
use crate::types::Table;

use super::utils::contains_missing;

impl Table {
    /// Keep only the named columns, in the given order.
    ///
    /// All names are resolved before anything changes, so an unknown name leaves the table
    /// untouched.
    pub fn slice_columns(&mut self, names: &[&str]) -> EtlResult<()> {
        let idxs = self.column_indices(names)?;
        self.rows = self
            .rows
            .iter()
            .map(|row| idxs.iter().map(|&i| row[i].clone()).collect())
            .collect();
        self.headers = names.iter().map(|&name| name.to_owned()).collect();
        Ok(())
    }

    /// Remove every row that has a text cell matching the missing-value pattern.
    ///
    /// Returns the number of rows removed.
    pub fn drop_missing(&mut self) -> usize {
        let before = self.rows.len();
        let missing = &self.missing;
        self.rows.retain(|row| !contains_missing(missing, row));
        before - self.rows.len()
    }
}
