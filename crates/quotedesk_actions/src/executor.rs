//! Applies decoded actions to a row store.

use crate::{Action, ActionOutcome, ActionRequest};
use quotedesk_core::{Header, Table};
use quotedesk_error::QuotedeskResult;
use quotedesk_interface::RowStore;
use tracing::{info, instrument, warn};

/// Applies action batches to a row store against a fixed header.
///
/// Each action runs on its own: a rejected or failed action is reported and
/// the rest of the batch still runs. Update and Delete re-read the store
/// before matching, so every action sees the effects of the ones before it.
#[derive(Debug)]
pub struct ActionExecutor<'a, S: RowStore + ?Sized> {
    store: &'a S,
    header: &'a Header,
}

impl<'a, S: RowStore + ?Sized> ActionExecutor<'a, S> {
    /// Creates an executor for one store and the header read this turn.
    pub fn new(store: &'a S, header: &'a Header) -> Self {
        Self { store, header }
    }

    /// Applies every request in order, one outcome per request.
    #[instrument(skip_all, fields(actions = requests.len()))]
    pub async fn execute(&self, requests: &[ActionRequest]) -> Vec<ActionOutcome> {
        let mut outcomes = Vec::with_capacity(requests.len());
        for request in requests {
            let outcome = self.apply(request).await;
            if outcome.is_applied() {
                info!(%outcome, "Action applied");
            } else {
                warn!(%outcome, "Action not applied");
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    async fn apply(&self, request: &ActionRequest) -> ActionOutcome {
        let result = match request {
            ActionRequest::Known(Action::Add { row }) => self.add(row).await,
            ActionRequest::Known(Action::Update {
                search_col,
                search_value,
                column,
                value,
            }) => self.update(search_col, search_value, column, value).await,
            ActionRequest::Known(Action::Delete {
                search_col,
                search_value,
            }) => self.delete(search_col, search_value).await,
            ActionRequest::Unknown { tag } => {
                return ActionOutcome::UnknownAction { tag: tag.clone() };
            }
            ActionRequest::Malformed { reason } => {
                return ActionOutcome::Malformed {
                    reason: reason.clone(),
                };
            }
        };

        result.unwrap_or_else(|e| ActionOutcome::StoreFailed {
            message: e.to_string(),
        })
    }

    async fn add(&self, row: &[String]) -> QuotedeskResult<ActionOutcome> {
        self.store.append(row).await?;
        Ok(ActionOutcome::Added {
            values: row.to_vec(),
        })
    }

    async fn update(
        &self,
        search_col: &str,
        search_value: &str,
        column: &str,
        value: &str,
    ) -> QuotedeskResult<ActionOutcome> {
        let Some(search_position) = self.header.position(search_col) else {
            return Ok(column_not_found(search_col));
        };
        let Some(target_position) = self.header.position(column) else {
            return Ok(column_not_found(column));
        };

        let table = self.store.read_all().await?;
        let Some(position) = table.find_first(search_position, search_value) else {
            return Ok(not_found(search_col, search_value));
        };

        let row_index = Table::store_row_index(position);
        let previous = table.rows()[position].cell(target_position).to_string();
        self.store
            .update_cell(row_index, target_position + 1, value)
            .await?;

        Ok(ActionOutcome::Updated {
            row_index,
            column: column.to_string(),
            previous,
            value: value.to_string(),
        })
    }

    async fn delete(&self, search_col: &str, search_value: &str) -> QuotedeskResult<ActionOutcome> {
        let Some(search_position) = self.header.position(search_col) else {
            return Ok(column_not_found(search_col));
        };

        let table = self.store.read_all().await?;
        let Some(position) = table.find_first(search_position, search_value) else {
            return Ok(not_found(search_col, search_value));
        };

        let row_index = Table::store_row_index(position);
        let values = table.rows()[position].cells().to_vec();
        self.store.delete_row(row_index).await?;

        Ok(ActionOutcome::Deleted { row_index, values })
    }
}

fn column_not_found(column: &str) -> ActionOutcome {
    ActionOutcome::ColumnNotFound {
        column: column.to_string(),
    }
}

fn not_found(search_col: &str, search_value: &str) -> ActionOutcome {
    ActionOutcome::NotFound {
        search_col: search_col.to_string(),
        search_value: search_value.to_string(),
    }
}
