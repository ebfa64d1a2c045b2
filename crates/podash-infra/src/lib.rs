//! External collaborators: spreadsheet fetch and AI insight generation
//!
//! Everything in this crate is a plain request/response call to a remote
//! service. Parsing stays in podash-sheet; this crate only obtains the raw
//! CSV text and turns a model digest into insight text.

pub mod fetch;
pub mod insight;

pub use fetch::fetch_sheet_csv;
pub use insight::InsightClient;
