//! CSV tokenizer and positional sheet interpreter
//!
//! The factory ledger arrives as a CSV export of one fixed sheet layout.
//! `tokenize` turns the raw text into rows of trimmed fields and
//! `interpret` maps those rows onto the domain model under the positional
//! conventions in [`layout`]. Both are pure functions over their input;
//! a full parse is `interpret(&tokenize(text))`.

pub mod interpreter;
pub mod layout;
pub mod tokenizer;

pub use interpreter::interpret;
pub use tokenizer::tokenize;

use podash_domain::DashboardModel;

/// Tokenize and interpret a raw CSV export in one step.
pub fn parse_sheet(csv_text: &str) -> DashboardModel {
    interpret(&tokenize(csv_text))
}
