//! Row store backends for Quotedesk.
//!
//! - [`GoogleSheetsStore`] talks to one worksheet through the Sheets v4 REST API.
//! - [`InMemoryRowStore`] keeps rows in memory with identical addressing.

#![warn(missing_docs)]

mod config;
mod google;
mod memory;

pub use config::{
    DEFAULT_EXPECTED_COLUMNS, DEFAULT_SHEETS_API_BASE, SheetConfig, SheetConfigBuilder,
};
pub use google::{GoogleSheetsStore, column_letter};
pub use memory::InMemoryRowStore;
