//! One console turn: snapshot, prompt, extract, apply.

use crate::{ActionExecutor, ActionOutcome, ParsedReply, parse_reply, table_instructions};
use quotedesk_core::{Input, Table};
use quotedesk_error::QuotedeskResult;
use quotedesk_interface::{IntentExtractor, RowStore};
use tracing::{debug, info, instrument};

/// What a turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// The reply held actions; one outcome per action
    Applied(Vec<ActionOutcome>),
    /// The reply was informational text
    Answer(String),
}

/// Spreadsheet assistant driving a row store through an intent extractor.
///
/// Holds no conversation state: each turn re-reads the table and sends it
/// whole to the extractor.
#[derive(Debug)]
pub struct SheetAssistant<S, E> {
    store: S,
    extractor: E,
    title: String,
    expected_columns: Vec<String>,
}

impl<S, E> SheetAssistant<S, E>
where
    S: RowStore,
    E: IntentExtractor,
{
    /// Creates an assistant for the sheet named `title`.
    ///
    /// Every snapshot must contain `expected_columns`.
    pub fn new(
        store: S,
        extractor: E,
        title: impl Into<String>,
        expected_columns: Vec<String>,
    ) -> Self {
        Self {
            store,
            extractor,
            title: title.into(),
            expected_columns,
        }
    }

    /// Sheet display name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The underlying row store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the table and checks its header.
    ///
    /// # Errors
    ///
    /// Fails when the store cannot be read or an expected column is missing.
    pub async fn snapshot(&self) -> QuotedeskResult<Table> {
        let table = self.store.read_all().await?;
        table.require_columns(&self.expected_columns)?;
        Ok(table)
    }

    /// Runs one turn for the operator's content (text, optionally an image).
    ///
    /// # Errors
    ///
    /// Fails when the snapshot cannot be read or the extractor call fails.
    /// Store failures while applying actions are reported per action in
    /// [`TurnResult::Applied`] instead.
    #[instrument(skip_all, fields(sheet = %self.title, image = user_content.iter().any(Input::is_image)))]
    pub async fn handle(&self, user_content: Vec<Input>) -> QuotedeskResult<TurnResult> {
        let table = self.snapshot().await?;
        debug!(rows = table.len(), "Read snapshot");

        let instructions =
            table_instructions(&self.title, &table, chrono::Local::now().date_naive())?;
        let reply = self.extractor.complete(&instructions, user_content).await?;

        match parse_reply(&reply) {
            ParsedReply::Answer(text) => Ok(TurnResult::Answer(text)),
            ParsedReply::Actions(requests) => {
                info!(actions = requests.len(), "Reply carried actions");
                let executor = ActionExecutor::new(&self.store, table.header());
                Ok(TurnResult::Applied(executor.execute(&requests).await))
            }
        }
    }

    /// Runs one text-only turn.
    ///
    /// # Errors
    ///
    /// See [`handle`](Self::handle).
    pub async fn handle_text(&self, instruction: &str) -> QuotedeskResult<TurnResult> {
        self.handle(vec![Input::Text(instruction.to_string())]).await
    }
}
