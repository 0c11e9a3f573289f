//! Tests for the Google Sheets row store against a local mock API.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
};
use quotedesk_error::{QuotedeskErrorKind, SheetErrorKind};
use quotedesk_interface::RowStore;
use quotedesk_sheets::{GoogleSheetsStore, SheetConfig, column_letter};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    query: Option<String>,
    auth: Option<String>,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockSheets {
    seen: Arc<Mutex<Vec<Recorded>>>,
}

async fn sheets_api(
    State(state): State<MockSheets>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    state.seen.lock().await.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        auth: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).ok(),
    });

    let reply = if method == Method::GET && path == "/v4/spreadsheets/sheet123" {
        json!({
            "sheets": [
                { "properties": { "sheetId": 42, "title": "Quotes" } },
                { "properties": { "sheetId": 7, "title": "Archive" } }
            ]
        })
    } else if method == Method::GET && path.contains("/values/") {
        json!({
            "range": "Quotes!A1:C3",
            "majorDimension": "ROWS",
            "values": [
                ["Name", "Status", "Notes"],
                ["Ana", "Pending"],
                ["Ben", "Sold", "NGI: 422"]
            ]
        })
    } else {
        json!({})
    };

    (StatusCode::OK, Json(reply))
}

async fn spawn_mock() -> anyhow::Result<(String, MockSheets)> {
    let state = MockSheets::default();
    let app = Router::new().fallback(sheets_api).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{}/v4/spreadsheets", addr), state))
}

#[test]
fn test_column_letters() {
    assert_eq!(column_letter(1), "A");
    assert_eq!(column_letter(9), "I");
    assert_eq!(column_letter(26), "Z");
    assert_eq!(column_letter(27), "AA");
    assert_eq!(column_letter(53), "BA");
}

#[test]
fn test_from_config_requires_credentials() {
    let err = GoogleSheetsStore::from_config(&SheetConfig::default()).unwrap_err();
    assert!(matches!(err.kind(), QuotedeskErrorKind::Config(_)));
}

#[tokio::test]
async fn test_read_all_resolves_first_worksheet() -> anyhow::Result<()> {
    let (base, mock) = spawn_mock().await?;
    let store = GoogleSheetsStore::new(base, "sheet123", "token-abc", None);

    let table = store.read_all().await?;
    assert_eq!(table.header().columns(), &["Name", "Status", "Notes"]);
    assert_eq!(table.len(), 2);

    // Metadata is fetched once and cached.
    store.read_all().await?;
    let seen = mock.seen.lock().await;
    let metadata_calls = seen
        .iter()
        .filter(|r| r.path == "/v4/spreadsheets/sheet123")
        .count();
    assert_eq!(metadata_calls, 1);
    assert_eq!(seen[1].path, "/v4/spreadsheets/sheet123/values/'Quotes'");
    assert!(seen.iter().all(|r| r.auth.as_deref() == Some("Bearer token-abc")));
    Ok(())
}

#[tokio::test]
async fn test_append_posts_row() -> anyhow::Result<()> {
    let (base, mock) = spawn_mock().await?;
    let store = GoogleSheetsStore::new(base, "sheet123", "token-abc", None);

    store
        .append(&["Cleo".to_string(), "Pending".to_string()])
        .await?;

    let seen = mock.seen.lock().await;
    let append = seen.last().expect("append request");
    assert_eq!(append.method, Method::POST);
    assert_eq!(
        append.path,
        "/v4/spreadsheets/sheet123/values/'Quotes'!A1:append"
    );
    let query = append.query.clone().unwrap_or_default();
    assert!(query.contains("valueInputOption=USER_ENTERED"));
    assert!(query.contains("insertDataOption=INSERT_ROWS"));
    assert_eq!(
        append.body,
        Some(json!({ "majorDimension": "ROWS", "values": [["Cleo", "Pending"]] }))
    );
    Ok(())
}

#[tokio::test]
async fn test_update_cell_targets_a1_range() -> anyhow::Result<()> {
    let (base, mock) = spawn_mock().await?;
    let store = GoogleSheetsStore::new(base, "sheet123", "token-abc", None);

    store.update_cell(3, 3, "NGI: 300").await?;

    let seen = mock.seen.lock().await;
    let update = seen.last().expect("update request");
    assert_eq!(update.method, Method::PUT);
    assert_eq!(update.path, "/v4/spreadsheets/sheet123/values/'Quotes'!C3");
    let body = update.body.clone().expect("json body");
    assert_eq!(body["values"], json!([["NGI: 300"]]));
    Ok(())
}

#[tokio::test]
async fn test_delete_row_uses_sheet_id_and_zero_based_range() -> anyhow::Result<()> {
    let (base, mock) = spawn_mock().await?;
    let store =
        GoogleSheetsStore::new(base, "sheet123", "token-abc", Some("Archive".to_string()));

    store.delete_row(3).await?;

    let seen = mock.seen.lock().await;
    let delete = seen.last().expect("batch update request");
    assert_eq!(delete.method, Method::POST);
    assert_eq!(delete.path, "/v4/spreadsheets/sheet123:batchUpdate");
    let range = &delete.body.as_ref().expect("json body")["requests"][0]["deleteDimension"]["range"];
    assert_eq!(range["sheetId"], 7);
    assert_eq!(range["dimension"], "ROWS");
    assert_eq!(range["startIndex"], 2);
    assert_eq!(range["endIndex"], 3);
    Ok(())
}

#[tokio::test]
async fn test_unknown_worksheet_is_reported() -> anyhow::Result<()> {
    let (base, _) = spawn_mock().await?;
    let store = GoogleSheetsStore::new(base, "sheet123", "token-abc", Some("Leads".to_string()));

    let err = store.read_all().await.unwrap_err();
    match err.kind() {
        QuotedeskErrorKind::Sheet(e) => {
            assert_eq!(e.kind, SheetErrorKind::WorksheetNotFound("Leads".into()))
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_header_row_is_never_deleted() {
    let store = GoogleSheetsStore::new("http://127.0.0.1:9", "sheet123", "token", None);
    assert!(store.delete_row(1).await.is_err());
}
