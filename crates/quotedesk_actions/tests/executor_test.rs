//! Tests for applying actions to a row store.

use async_trait::async_trait;
use quotedesk_actions::{Action, ActionExecutor, ActionOutcome, ActionRequest};
use quotedesk_core::{Header, Table};
use quotedesk_error::{QuotedeskResult, SheetError, SheetErrorKind};
use quotedesk_interface::RowStore;
use quotedesk_sheets::InMemoryRowStore;

fn quotes() -> InMemoryRowStore {
    InMemoryRowStore::from_values(vec![
        vec!["Name".into(), "Status".into(), "Notes".into()],
        vec!["John Doe".into(), "Pending".into(), "NGI: 422".into()],
        vec!["Ana".into(), "Pending".into()],
        vec!["Ana".into(), "Quoted".into()],
        vec!["Ben".into(), "Sold".into()],
    ])
    .expect("valid header")
}

fn header() -> Header {
    Header::new(vec!["Name".into(), "Status".into(), "Notes".into()]).expect("valid header")
}

fn update(search_value: &str, column: &str, value: &str) -> ActionRequest {
    Action::Update {
        search_col: "Name".into(),
        search_value: search_value.into(),
        column: column.into(),
        value: value.into(),
    }
    .into()
}

fn delete(search_value: &str) -> ActionRequest {
    Action::Delete {
        search_col: "Name".into(),
        search_value: search_value.into(),
    }
    .into()
}

#[tokio::test]
async fn test_match_is_trimmed_and_case_insensitive() {
    let store = quotes();
    let header = header();
    let executor = ActionExecutor::new(&store, &header);

    let outcomes = executor.execute(&[update("  john doe ", "Status", "Sold")]).await;

    assert_eq!(
        outcomes,
        vec![ActionOutcome::Updated {
            row_index: 2,
            column: "Status".into(),
            previous: "Pending".into(),
            value: "Sold".into(),
        }]
    );
    assert_eq!(store.rows().await[0].cell(1), "Sold");
}

#[tokio::test]
async fn test_only_first_match_is_updated() {
    let store = quotes();
    let header = header();
    let executor = ActionExecutor::new(&store, &header);

    executor.execute(&[update("Ana", "Notes", "NGI: 300")]).await;

    let rows = store.rows().await;
    assert_eq!(rows[1].cell(2), "NGI: 300");
    assert_eq!(rows[2].cell(2), "");
}

#[tokio::test]
async fn test_mixed_batch_reports_each_action() {
    let store = quotes();
    let header = header();
    let executor = ActionExecutor::new(&store, &header);

    let outcomes = executor
        .execute(&[
            Action::Add {
                row: vec!["Cleo".into(), "Pending".into()],
            }
            .into(),
            update("Ben", "Carrier", "Progressive"),
            delete("Ben"),
        ])
        .await;

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], ActionOutcome::Added { .. }));
    assert_eq!(
        outcomes[1],
        ActionOutcome::ColumnNotFound {
            column: "Carrier".into()
        }
    );
    assert_eq!(
        outcomes[2],
        ActionOutcome::Deleted {
            row_index: 5,
            values: vec!["Ben".into(), "Sold".into()],
        }
    );

    let names: Vec<String> = store
        .rows()
        .await
        .iter()
        .map(|row| row.cell(0).to_string())
        .collect();
    assert_eq!(names, ["John Doe", "Ana", "Ana", "Cleo"]);
}

#[tokio::test]
async fn test_sequential_deletes_follow_shifted_rows() {
    let store = quotes();
    let header = header();
    let executor = ActionExecutor::new(&store, &header);

    let outcomes = executor.execute(&[delete("John Doe"), delete("Ben")]).await;

    assert_eq!(
        outcomes,
        vec![
            ActionOutcome::Deleted {
                row_index: 2,
                values: vec!["John Doe".into(), "Pending".into(), "NGI: 422".into()],
            },
            ActionOutcome::Deleted {
                row_index: 4,
                values: vec!["Ben".into(), "Sold".into()],
            },
        ]
    );
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_not_found_leaves_rows_unchanged() {
    let store = quotes();
    let header = header();
    let executor = ActionExecutor::new(&store, &header);

    let outcomes = executor
        .execute(&[update("Zed", "Status", "Sold"), delete("Zed")])
        .await;

    for outcome in &outcomes {
        assert_eq!(
            outcome,
            &ActionOutcome::NotFound {
                search_col: "Name".into(),
                search_value: "Zed".into(),
            }
        );
        assert!(!outcome.is_applied());
    }
    assert_eq!(store.len().await, 4);
}

#[tokio::test]
async fn test_unknown_and_malformed_are_reported() {
    let store = quotes();
    let header = header();
    let executor = ActionExecutor::new(&store, &header);

    let outcomes = executor
        .execute(&[
            ActionRequest::Unknown { tag: "merge".into() },
            ActionRequest::Malformed {
                reason: "missing `row`".into(),
            },
        ])
        .await;

    assert_eq!(outcomes[0].to_string(), "Unknown action: 'merge'");
    assert_eq!(outcomes[1].to_string(), "Malformed action: missing `row`");
    assert_eq!(store.len().await, 4);
}

/// Store whose writes always fail.
struct ReadOnlyStore(InMemoryRowStore);

#[async_trait]
impl RowStore for ReadOnlyStore {
    async fn read_all(&self) -> QuotedeskResult<Table> {
        self.0.read_all().await
    }

    async fn append(&self, _values: &[String]) -> QuotedeskResult<()> {
        Err(SheetError::new(SheetErrorKind::Request("connection reset".into())).into())
    }

    async fn update_cell(&self, _row: usize, _col: usize, _value: &str) -> QuotedeskResult<()> {
        Err(SheetError::new(SheetErrorKind::Request("connection reset".into())).into())
    }

    async fn delete_row(&self, row_index: usize) -> QuotedeskResult<()> {
        self.0.delete_row(row_index).await
    }
}

#[tokio::test]
async fn test_store_failure_does_not_stop_batch() {
    let store = ReadOnlyStore(quotes());
    let header = header();
    let executor = ActionExecutor::new(&store, &header);

    let outcomes = executor
        .execute(&[
            Action::Add { row: vec!["Cleo".into()] }.into(),
            update("Ana", "Status", "Sold"),
            delete("Ana"),
        ])
        .await;

    assert!(matches!(&outcomes[0], ActionOutcome::StoreFailed { message } if message.contains("connection reset")));
    assert!(matches!(outcomes[1], ActionOutcome::StoreFailed { .. }));
    assert!(matches!(outcomes[2], ActionOutcome::Deleted { row_index: 3, .. }));
}

#[tokio::test]
async fn test_blank_search_column_is_not_found() {
    let store = InMemoryRowStore::from_values(vec![
        vec!["Name".into(), "".into(), "Notes".into()],
        vec!["Ana".into(), "".into(), "NGI: 300".into()],
    ])
    .expect("valid header");
    let header =
        Header::new(vec!["Name".into(), "".into(), "Notes".into()]).expect("valid header");
    let executor = ActionExecutor::new(&store, &header);

    let request: ActionRequest = Action::Delete {
        search_col: "".into(),
        search_value: "".into(),
    }
    .into();
    let outcomes = executor.execute(&[request]).await;

    assert_eq!(
        outcomes,
        vec![ActionOutcome::ColumnNotFound { column: "".into() }]
    );
    assert_eq!(store.rows().await.len(), 1);
}
