//! Spreadsheet export fetch

use podash_types::{Error, Result};
use tracing::info;

/// Fetch the raw CSV text of the sheet export.
///
/// A non-2xx response is a hard failure; retry policy belongs to the
/// caller. Timeouts are configured on the shared [`reqwest::Client`].
pub async fn fetch_sheet_csv(client: &reqwest::Client, url: &str) -> Result<String> {
    let resp = client.get(url).send().await?;

    if !resp.status().is_success() {
        return Err(Error::SheetFetch {
            status: resp.status().as_u16(),
        });
    }

    let text = resp.text().await?;
    info!(bytes = text.len(), "fetched sheet export");
    Ok(text)
}
