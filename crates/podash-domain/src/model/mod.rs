//! Domain model types

pub mod dashboard;
pub mod invoice;
pub mod line_item;
pub mod summary;

pub use dashboard::DashboardModel;
pub use invoice::InvoiceRecord;
pub use line_item::ProductionLineItem;
pub use summary::SummaryTotals;
