use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::parse_export_date;

/// One outbound shipment/invoice descriptor, read column-wise from the
/// invoice metadata block of the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Brand label. Not unique; several invoices may share a brand.
    pub brand: String,
    /// Export date as entered in the sheet. Format varies between
    /// day-first, month-first and ISO, so the raw text is kept.
    pub export_date: String,
    /// Total quantity on the invoice.
    pub total_qty: i64,
    /// Container / shipping info, free text.
    pub container_info: String,
    /// Invoice title. Display/search key, not guaranteed unique.
    pub invoice_title: String,
}

impl InvoiceRecord {
    /// Best-effort typed view of `export_date`. `None` when the cell
    /// matches none of the known formats.
    pub fn export_date_parsed(&self) -> Option<NaiveDate> {
        parse_export_date(&self.export_date)
    }
}
