//! Domain model for the purchase-order/production/shipment ledger

pub mod dates;
pub mod model;

pub use dates::parse_export_date;
pub use model::{DashboardModel, InvoiceRecord, ProductionLineItem, SummaryTotals};
