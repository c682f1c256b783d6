//! Delimited text source.
//!
//! Reads a whole file, decodes it with the configured encoding, and splits every line on a
//! single-byte delimiter. Quoting is disabled: fields are taken verbatim between delimiters.
//!
//! Blank lines are skipped, so they do not count when a header row is selected by index: in
//! `"\nname;age\nada;36\n"` the header is record `0`, not line `1`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::error::{EtlError, EtlResult};
use crate::processing::clean_text;

use super::source::DataSource;

/// Options controlling how a delimited text file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSourceOptions {
    /// Field delimiter (default `;`).
    pub delimiter: u8,
    /// Encoding label understood by `encoding_rs` (default `utf-8`).
    pub encoding: String,
}

impl Default for TextSourceOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            encoding: "utf-8".to_string(),
        }
    }
}

/// A [`DataSource`] backed by a delimiter-separated text file.
///
/// Header-row indices count non-blank lines only (see [`parse_records`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedText {
    path: PathBuf,
    options: TextSourceOptions,
}

impl DelimitedText {
    /// Source for `path` with default options.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, TextSourceOptions::default())
    }

    /// Source for `path` with explicit options.
    pub fn with_options(path: impl AsRef<Path>, options: TextSourceOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &TextSourceOptions {
        &self.options
    }

    fn read_text(&self) -> EtlResult<String> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => EtlError::FileNotFound {
                path: self.path.clone(),
            },
            _ => EtlError::Io(e),
        })?;
        decode(&bytes, &self.options.encoding)
    }
}

impl DataSource for DelimitedText {
    fn records(&self) -> EtlResult<Vec<Vec<String>>> {
        parse_records(&self.read_text()?, self.options.delimiter)
    }
}

/// Decode `bytes` using the encoding named by `label`.
///
/// A leading byte-order mark overrides the label. Malformed input is an error rather than being
/// replaced.
pub fn decode(bytes: &[u8], label: &str) -> EtlResult<String> {
    let encoding =
        Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| EtlError::UnknownEncoding {
            label: label.to_owned(),
        })?;
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(EtlError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("input is not valid {}", used.name()),
        )));
    }
    Ok(text.into_owned())
}

/// Split `text` into records on `delimiter`, one record per non-blank line.
///
/// Blank lines produce no record, so record indices (and therefore header-row indices) skip
/// them. Every line must have the same number of fields.
pub fn parse_records(text: &str, delimiter: u8) -> EtlResult<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(record.iter().map(clean_text).collect());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{decode, parse_records};
    use crate::error::EtlError;

    #[test]
    fn splits_on_delimiter_without_quoting() {
        let records = parse_records("a;\"b\";c\r\n1;2,5;x\n", b';').unwrap();
        assert_eq!(
            records,
            vec![
                vec!["a".to_string(), "\"b\"".to_string(), "c".to_string()],
                vec!["1".to_string(), "2,5".to_string(), "x".to_string()],
            ]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let records = parse_records("a|b\n\n1|2\n", b'|').unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn leading_blank_line_does_not_shift_record_indices() {
        let records = parse_records("\nname;age\nada;36\n", b';').unwrap();
        assert_eq!(records[0], vec!["name".to_string(), "age".to_string()]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn ragged_lines_are_rejected() {
        let err = parse_records("a;b\n1\n", b';').unwrap_err();
        assert!(matches!(err, EtlError::Csv(_)));
    }

    #[test]
    fn decodes_latin1() {
        let text = decode(&[0x63, 0x61, 0x66, 0xE9], "latin1").unwrap();
        assert_eq!(text, "caf\u{e9}");
    }

    #[test]
    fn rejects_unknown_encoding_label() {
        let err = decode(b"x", "klingon").unwrap_err();
        assert!(
            matches!(err, EtlError::UnknownEncoding { ref label } if label == "klingon")
        );
    }

    #[test]
    fn rejects_malformed_utf8() {
        assert!(matches!(
            decode(&[0x61, 0xFF, 0x62], "utf-8"),
            Err(EtlError::Io(_))
        ));
    }
}
