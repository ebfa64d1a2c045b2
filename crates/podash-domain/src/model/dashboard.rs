use serde::{Deserialize, Serialize};

use super::{InvoiceRecord, ProductionLineItem, SummaryTotals};

/// Top-level parse result: invoice block, line items and their totals.
///
/// Built whole in one parse pass and read-only afterwards. A refresh
/// produces a fresh model that replaces the previous one; there is no
/// in-place update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardModel {
    pub invoices: Vec<InvoiceRecord>,
    pub items: Vec<ProductionLineItem>,
    pub summary: SummaryTotals,
}
