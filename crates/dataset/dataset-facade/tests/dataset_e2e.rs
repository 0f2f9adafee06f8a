//! End-to-end tests for the dataset module, through the facade surface only.

use std::io::Write;

use tempfile::NamedTempFile;

use dataset_facade::{CsvTableSource, DatasetConfig, DatasetError, TableSource, TableStore};

const HEADER: &str = "year,month,region,birth_count,<20,20-29,30-39,40+";

fn fixture(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[test]
fn e2e_load_and_inspect() {
    let file = fixture(&[
        "2020,January,East,100,10,40,30,20",
        "2020,January,West,80,5,35,30,10",
        "2021,February,East,95,8,42,30,15",
    ]);

    let source = CsvTableSource::new(DatasetConfig::new(file.path()));
    let table = source.load().unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.total_births(), 275);
    assert_eq!(table.year_span(), Some((2020, 2021)));
    assert_eq!(table.regions(), vec!["East".to_string(), "West".to_string()]);
}

#[test]
fn e2e_store_returns_same_handle() {
    let file = fixture(&["2020,January,East,100,10,40,30,20"]);
    let source = CsvTableSource::new(DatasetConfig::new(file.path()));

    let store = TableStore::new();
    let first = store.get_or_load(&source).unwrap();
    let second = store.get_or_load(&source).unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn e2e_missing_file_diagnostic() {
    let source = CsvTableSource::new(DatasetConfig::new("/no/such/file.csv"));
    match source.load() {
        Err(DatasetError::FileNotFound(message)) => {
            assert!(message.contains("/no/such/file.csv"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn e2e_header_must_match_exactly() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Year,month,region,birth_count,<20,20-29,30-39,40+").unwrap();
    writeln!(file, "2020,January,East,100,10,40,30,20").unwrap();

    let source = CsvTableSource::new(DatasetConfig::new(file.path()));
    assert!(matches!(
        source.load(),
        Err(DatasetError::MissingColumn(column)) if column == "year"
    ));
}
