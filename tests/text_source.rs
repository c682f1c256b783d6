use std::fs;

use delimited_etl::EtlError;
use delimited_etl::ingestion::{DataSource, DelimitedText, InMemory, TextSourceOptions};
use delimited_etl::processing::MissingPattern;
use delimited_etl::types::{Table, Value};

fn empty_table() -> Table {
    Table::new(MissingPattern::literal("-").unwrap())
}

#[test]
fn load_reads_headers_and_rows_from_fixture() {
    let source = DelimitedText::new("tests/fixtures/sample.txt");
    let mut table = empty_table();
    table.load(&source, Some(0)).unwrap();

    assert_eq!(
        table.headers(),
        ["number", "class", "relevancy", "comma-num", "Nan", "cents"]
    );
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.rows()[0][3], Value::from("10,1"));
}

#[test]
fn every_valid_header_row_yields_that_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lines.txt");
    fs::write(&path, "a;b\r\nc;d\r\ne;f\r\n").unwrap();

    let source = DelimitedText::new(&path);
    let expected = [["a", "b"], ["c", "d"], ["e", "f"]];
    for (idx, line) in expected.iter().enumerate() {
        let headers = source.headers(Some(idx)).unwrap().unwrap();
        assert_eq!(headers, line);

        let mut table = empty_table();
        table.load(&source, Some(idx)).unwrap();
        assert_eq!(table.headers(), line);
        assert_eq!(table.row_count(), 2);
    }
}

#[test]
fn without_header_row_every_line_is_data() {
    let source = DelimitedText::new("tests/fixtures/sample.txt");
    let mut table = empty_table();
    table.load(&source, None).unwrap();

    assert!(table.headers().is_empty());
    assert_eq!(table.row_count(), 5);
    assert_eq!(table.rows()[0][0], Value::from("number"));
}

#[test]
fn missing_file_is_reported() {
    let source = DelimitedText::new("tests/fixtures/does_not_exist.txt");
    let err = source.records().unwrap_err();
    assert!(matches!(err, EtlError::FileNotFound { .. }));
    assert!(err.to_string().contains("does_not_exist.txt"));
}

#[test]
fn unreadable_path_is_an_io_error_not_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    // Reading a directory fails with a kind other than NotFound.
    let source = DelimitedText::new(dir.path());
    let err = source.records().unwrap_err();
    assert!(matches!(err, EtlError::Io(_)), "got {err:?}");
}

#[test]
fn header_row_past_end_is_reported() {
    let source = DelimitedText::new("tests/fixtures/sample.txt");
    let mut table = empty_table();
    let err = table.load(&source, Some(5)).unwrap_err();
    assert!(matches!(err, EtlError::HeaderRowOutOfRange { index: 5, lines: 5 }));
}

#[test]
fn delimiter_and_encoding_are_configurable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    // "café|prix\nnoir|1200\n" in ISO-8859-1.
    let mut bytes = b"caf".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"|prix\nnoir|1200\n");
    fs::write(&path, bytes).unwrap();

    let source = DelimitedText::with_options(
        &path,
        TextSourceOptions {
            delimiter: b'|',
            encoding: "iso-8859-1".to_string(),
        },
    );
    let mut table = empty_table();
    table.load(&source, Some(0)).unwrap();
    assert_eq!(table.headers(), ["caf\u{e9}", "prix"]);
    assert_eq!(table.rows()[0], vec![Value::from("noir"), Value::from("1200")]);
}

#[test]
fn in_memory_source_loads_like_a_file() {
    let source = InMemory::from_strs(&[&["x", "y"], &["1", "-"], &["2", "3"]]);
    let mut table = empty_table();
    table.load(&source, Some(0)).unwrap();
    table.drop_missing();
    assert_eq!(
        table.matrix(),
        vec![
            vec![Value::from("x"), Value::from("y")],
            vec![Value::from("2"), Value::from("3")],
        ]
    );
}
