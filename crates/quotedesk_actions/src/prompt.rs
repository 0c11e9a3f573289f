//! System instructions for the console assistant.

use chrono::NaiveDate;
use quotedesk_core::Table;
use quotedesk_error::{JsonError, QuotedeskResult};

/// Builds the system instructions for one turn.
///
/// The whole current table is embedded as JSON records, so every call
/// carries a fresh snapshot and the extractor needs no memory.
///
/// # Errors
///
/// Fails only if the snapshot cannot be serialized.
pub fn table_instructions(title: &str, table: &Table, today: NaiveDate) -> QuotedeskResult<String> {
    let records = serde_json::to_string(&table.records())
        .map_err(|e| JsonError::new(format!("Failed to serialize snapshot: {}", e)))?;
    let columns = table
        .header()
        .columns()
        .iter()
        .filter(|name| !name.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        r#"You are an expert manager for the spreadsheet '{title}'.
Today's date is {today}. Use it for the Date column when adding a row unless the user gives another date.

Current data (one JSON object per row): {records}

Columns, in order: {columns}.

Instructions:
1. To ADD a row, return ONLY JSON: {{"action": "add", "row": ["value1", "value2", ...]}} with one value per column, in column order. Use "" for unknown values.
2. To UPDATE a cell, return ONLY JSON: {{"action": "update", "search_col": "Name", "search_value": "John Doe", "column": "Status", "value": "Sold"}}
3. To DELETE a row, return ONLY JSON: {{"action": "delete", "search_col": "Name", "search_value": "John Doe"}}
4. For several changes, return ONLY a JSON array of these objects.
5. To ANSWER questions (e.g. 'Who is pending?'), respond with natural text and no JSON.
6. The Notes column contains prices like 'NGI: 422'.
7. When an image of a quote is attached, read the customer and price details from it and add or update the matching row."#,
        today = today.format("%Y-%m-%d"),
    ))
}
