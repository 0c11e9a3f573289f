//! Tests for the table snapshot model.

use quotedesk_core::{Header, Row, Table, cells_match};
use quotedesk_error::SheetErrorKind;

fn quotes_table() -> Table {
    Table::from_values(vec![
        vec!["Date".into(), "Status".into(), "Name".into(), "Notes".into()],
        vec!["2024-05-01".into(), "Pending".into(), "john doe".into()],
        vec!["2024-05-02".into(), "Sold".into(), "Mike".into(), "NGI: 422".into()],
        vec!["2024-05-03".into(), "Pending".into(), "Mike".into()],
    ])
    .expect("valid table")
}

#[test]
fn test_header_rejects_duplicates() {
    let err = Header::new(vec!["Name".into(), "Status".into(), "Name".into()]).unwrap_err();
    assert_eq!(err.kind, SheetErrorKind::DuplicateColumn("Name".into()));
}

#[test]
fn test_header_drops_trailing_blanks() {
    let header = Header::new(vec!["Name".into(), "".into(), " ".into()]).unwrap();
    assert_eq!(header.len(), 1);
    assert_eq!(header.column_index("Name"), Some(1));
}

#[test]
fn test_short_row_reads_empty() {
    let row = Row::new(vec!["a".into()]);
    assert_eq!(row.cell(0), "a");
    assert_eq!(row.cell(5), "");
}

#[test]
fn test_set_cell_pads_row() {
    let mut row = Row::new(vec!["a".into()]);
    row.set_cell(3, "d");
    assert_eq!(row.cells(), &["a", "", "", "d"]);
}

#[test]
fn test_matching_is_trimmed_and_case_insensitive() {
    assert!(cells_match("john doe", "  John Doe "));
    assert!(!cells_match("john doe", "john"));
}

#[test]
fn test_find_first_returns_earliest_duplicate() {
    let table = quotes_table();
    let name = table.header().position("Name").unwrap();
    assert_eq!(table.find_first(name, "mike"), Some(1));
    assert_eq!(Table::store_row_index(1), 3);
    assert_eq!(table.find_first(name, "nobody"), None);
}

#[test]
fn test_records_fill_missing_cells() {
    let table = quotes_table();
    let records = table.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["Name"], "john doe");
    assert_eq!(records[0]["Notes"], "");
    assert_eq!(records[1]["Notes"], "NGI: 422");
}

#[test]
fn test_require_columns_lists_missing() {
    let table = quotes_table();
    assert!(table.require_columns(&["Name", "Status"]).is_ok());

    let err = table.require_columns(&["Name", "Carrier", "Sold"]).unwrap_err();
    assert_eq!(
        err.kind,
        SheetErrorKind::HeaderMismatch {
            missing: vec!["Carrier".into(), "Sold".into()]
        }
    );
}

#[test]
fn test_empty_values_make_empty_table() {
    let table = Table::from_values(Vec::new()).unwrap();
    assert!(table.header().is_empty());
    assert!(table.is_empty());
}

#[test]
fn test_blank_name_never_matches_blank_column() {
    let header = Header::new(vec!["Name".into(), "".into(), "Notes".into()]).unwrap();
    assert_eq!(header.len(), 3);
    assert_eq!(header.position(""), None);
    assert_eq!(header.column_index(""), None);
    assert_eq!(header.position("Notes"), Some(2));
}
