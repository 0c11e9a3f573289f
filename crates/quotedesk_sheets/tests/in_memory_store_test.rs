//! Tests for the in-memory row store.

use quotedesk_error::{QuotedeskErrorKind, SheetErrorKind};
use quotedesk_interface::RowStore;
use quotedesk_sheets::InMemoryRowStore;

fn store() -> InMemoryRowStore {
    InMemoryRowStore::from_values(vec![
        vec!["Name".into(), "Status".into(), "Notes".into()],
        vec!["Ana".into(), "Pending".into()],
        vec!["Ben".into(), "Sold".into(), "NGI: 422".into()],
    ])
    .expect("valid header")
}

fn sheet_kind(err: &quotedesk_error::QuotedeskError) -> &SheetErrorKind {
    match err.kind() {
        QuotedeskErrorKind::Sheet(e) => &e.kind,
        other => panic!("expected sheet error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_read_all_returns_snapshot() -> anyhow::Result<()> {
    let table = store().read_all().await?;
    assert_eq!(table.header().columns(), &["Name", "Status", "Notes"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[1].cell(2), "NGI: 422");
    Ok(())
}

#[tokio::test]
async fn test_append_adds_to_bottom() -> anyhow::Result<()> {
    let store = store();
    store.append(&["Cleo".to_string(), "Pending".to_string()]).await?;

    let rows = store.rows().await;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].cell(0), "Cleo");
    Ok(())
}

#[tokio::test]
async fn test_update_cell_uses_store_coordinates() -> anyhow::Result<()> {
    let store = store();
    // Row 2 is the first data row, column 3 is "Notes".
    store.update_cell(2, 3, "NGI: 300").await?;

    let rows = store.rows().await;
    assert_eq!(rows[0].cell(2), "NGI: 300");
    assert_eq!(rows[0].cell(0), "Ana");
    Ok(())
}

#[tokio::test]
async fn test_delete_row_shifts_rows_up() -> anyhow::Result<()> {
    let store = store();
    store.delete_row(2).await?;

    let rows = store.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cell(0), "Ben");
    Ok(())
}

#[tokio::test]
async fn test_header_row_cannot_be_addressed() {
    let store = store();
    let err = store.delete_row(1).await.unwrap_err();
    assert_eq!(sheet_kind(&err), &SheetErrorKind::RowOutOfRange(1));

    let err = store.update_cell(4, 1, "x").await.unwrap_err();
    assert_eq!(sheet_kind(&err), &SheetErrorKind::RowOutOfRange(4));

    let err = store.update_cell(2, 9, "x").await.unwrap_err();
    assert_eq!(sheet_kind(&err), &SheetErrorKind::ColumnOutOfRange(9));
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_clones_share_rows() -> anyhow::Result<()> {
    let store = store();
    let other = store.clone();
    other.delete_row(3).await?;
    assert_eq!(store.len().await, 1);
    Ok(())
}
