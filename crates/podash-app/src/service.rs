//! Dashboard refresh service
//!
//! One fetch+parse cycle per call. Parsing itself never fails, so the only
//! failure mode is obtaining the source text; a failed cycle leaves the
//! last successfully built model untouched for the caller to keep showing.

use std::path::PathBuf;

use podash_domain::DashboardModel;
use podash_infra::fetch_sheet_csv;
use podash_sheet::parse_sheet;
use podash_types::{Error, Result};
use tracing::info;

/// Where the CSV export comes from.
#[derive(Debug, Clone)]
pub enum SheetSource {
    /// Remote export URL (the normal case).
    Url(String),
    /// Local CSV file, for offline use and tests.
    File(PathBuf),
}

impl SheetSource {
    /// Treat arguments that exist on disk as files, anything else as a URL.
    pub fn from_arg(arg: &str) -> Self {
        let path = PathBuf::from(arg);
        if path.exists() {
            SheetSource::File(path)
        } else {
            SheetSource::Url(arg.to_string())
        }
    }
}

/// Fetch+parse cycles with last-good-model semantics.
///
/// `refresh` takes `&mut self`, so two refreshes cannot overlap on one
/// service instance. Callers running separate instances against the same
/// display get last-applied-wins, which is acceptable for this data.
pub struct DashboardService {
    client: reqwest::Client,
    source: SheetSource,
    model: Option<DashboardModel>,
}

impl DashboardService {
    pub fn new(client: reqwest::Client, source: SheetSource) -> Self {
        Self {
            client,
            source,
            model: None,
        }
    }

    /// The last successfully parsed model, if any cycle has completed.
    pub fn model(&self) -> Option<&DashboardModel> {
        self.model.as_ref()
    }

    /// Run one fetch+parse cycle. On success the new model atomically
    /// replaces the previous one; on failure the previous model is kept
    /// and the error propagates with its original context.
    pub async fn refresh(&mut self) -> Result<&DashboardModel> {
        let text = self.load_text().await?;
        let model = parse_sheet(&text);
        info!(
            invoices = model.invoices.len(),
            items = model.items.len(),
            "dashboard refreshed"
        );
        Ok(self.model.insert(model))
    }

    async fn load_text(&self) -> Result<String> {
        match &self.source {
            SheetSource::Url(url) => fetch_sheet_csv(&self.client, url).await,
            SheetSource::File(path) => std::fs::read_to_string(path)
                .map_err(|_| Error::FileNotFound(path.display().to_string())),
        }
    }
}
