//! Trait definitions for the Quotedesk sheet assistant.
//!
//! The two external collaborators, the row store and the intent extractor,
//! are injected through these traits so the flows can run against fakes.

#![warn(missing_docs)]

mod extractor;
mod row_store;

pub use extractor::IntentExtractor;
pub use row_store::RowStore;
