//! In-memory source.

use crate::error::{EtlError, EtlResult};
use crate::processing::clean_text;

use super::source::DataSource;

/// A [`DataSource`] over records already held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemory {
    records: Vec<Vec<String>>,
}

impl InMemory {
    /// Wrap `records` (header record included, if there is one).
    pub fn new(records: Vec<Vec<String>>) -> Self {
        Self { records }
    }

    /// Build from borrowed string slices.
    pub fn from_strs(records: &[&[&str]]) -> Self {
        Self::new(
            records
                .iter()
                .map(|r| r.iter().map(|&c| c.to_owned()).collect())
                .collect(),
        )
    }
}

impl DataSource for InMemory {
    fn records(&self) -> EtlResult<Vec<Vec<String>>> {
        let width = self.records.first().map(Vec::len).unwrap_or(0);
        if let Some(r) = self.records.iter().find(|r| r.len() != width) {
            return Err(EtlError::LengthMismatch {
                expected: width,
                actual: r.len(),
            });
        }
        Ok(self
            .records
            .iter()
            .map(|r| r.iter().map(|c| clean_text(c)).collect())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemory;
    use crate::error::EtlError;
    use crate::ingestion::DataSource;

    #[test]
    fn records_are_cleaned() {
        let src = InMemory::from_strs(&[&["a\n", "b\r\n"], &["1", "2"]]);
        assert_eq!(
            src.headers(Some(0)).unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            src.rows(Some(0)).unwrap(),
            vec![vec!["1".to_string(), "2".to_string()]]
        );
    }

    #[test]
    fn ragged_records_are_rejected() {
        let src = InMemory::from_strs(&[&["a", "b"], &["1"]]);
        assert!(matches!(
            src.records().unwrap_err(),
            EtlError::LengthMismatch { expected: 2, actual: 1 }
        ));
    }
}
