//! CSV tokenizer
//!
//! Character-level scan with RFC-4180-style quoting. The export is not
//! always well formed, so the tokenizer never fails: an unterminated quote
//! simply leaves the rest of the input inside the quoted field. Data-level
//! cleanup (blank rows, sentinel rows) is the interpreter's job.

/// Split raw CSV text into rows of trimmed fields.
///
/// - `"` toggles quoted mode; commas and line breaks inside quotes are
///   literal content.
/// - A comma outside quotes ends the field; `\n` or `\r` outside quotes
///   ends the row, with `\r\n` counted as a single terminator.
/// - Buffered content at end of input is flushed as a final row, so a
///   missing trailing newline loses nothing.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                row.push(field.trim().to_string());
                field.clear();
            }
            '\r' | '\n' if !in_quotes => {
                if !field.is_empty() || !row.is_empty() {
                    row.push(field.trim().to_string());
                    field.clear();
                    rows.push(std::mem::take(&mut row));
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field.trim().to_string());
        rows.push(row);
    }

    rows
}
