//! The [`DataSource`] capability shared by every input kind.

use crate::error::{EtlError, EtlResult};

/// Headers and rows split out of a source's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// The header record, if a header row was requested.
    pub headers: Option<Vec<String>>,
    /// Every other record, in input order.
    pub rows: Vec<Vec<String>>,
}

/// Something that can produce a header list and data rows as text.
///
/// Implementors only provide [`DataSource::records`]; header selection is shared.
pub trait DataSource {
    /// All records in input order, with line terminators stripped from every field.
    fn records(&self) -> EtlResult<Vec<Vec<String>>>;

    /// Split the records into headers and rows in a single read.
    fn read(&self, header_row: Option<usize>) -> EtlResult<RawTable> {
        split_header(self.records()?, header_row)
    }

    /// The header record at `header_row`, or `None` when no header row is requested.
    fn headers(&self, header_row: Option<usize>) -> EtlResult<Option<Vec<String>>> {
        Ok(self.read(header_row)?.headers)
    }

    /// All records except the header record.
    fn rows(&self, header_row: Option<usize>) -> EtlResult<Vec<Vec<String>>> {
        Ok(self.read(header_row)?.rows)
    }
}

/// Remove the record at `header_row` (if any) and return it as the headers.
pub fn split_header(
    mut records: Vec<Vec<String>>,
    header_row: Option<usize>,
) -> EtlResult<RawTable> {
    match header_row {
        None => Ok(RawTable {
            headers: None,
            rows: records,
        }),
        Some(index) if index < records.len() => {
            let headers = records.remove(index);
            Ok(RawTable {
                headers: Some(headers),
                rows: records,
            })
        }
        Some(index) => Err(EtlError::HeaderRowOutOfRange {
            index,
            lines: records.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::split_header;
    use crate::error::EtlError;

    fn records() -> Vec<Vec<String>> {
        vec![
            vec!["pre".to_string()],
            vec!["name".to_string()],
            vec!["ada".to_string()],
        ]
    }

    #[test]
    fn header_row_is_removed_from_rows() {
        let raw = split_header(records(), Some(1)).unwrap();
        assert_eq!(raw.headers, Some(vec!["name".to_string()]));
        assert_eq!(
            raw.rows,
            vec![vec!["pre".to_string()], vec!["ada".to_string()]]
        );
    }

    #[test]
    fn no_header_row_keeps_every_record() {
        let raw = split_header(records(), None).unwrap();
        assert_eq!(raw.headers, None);
        assert_eq!(raw.rows.len(), 3);
    }

    #[test]
    fn header_row_past_end_is_an_error() {
        let err = split_header(records(), Some(3)).unwrap_err();
        assert!(matches!(
            err,
            EtlError::HeaderRowOutOfRange { index: 3, lines: 3 }
        ));
    }
}
