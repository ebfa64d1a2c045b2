//! Fixed sheet layout
//!
//! The export has one known layout maintained by hand in the factory's
//! spreadsheet; nothing here is configurable or discovered. Every column
//! and row index lives in this table so the convention can be audited in
//! one place instead of as magic numbers inside the parse loop.
//!
//! Columns are 0-based sheet positions: A=0, B=1, ... Columns G (6) and
//! P (15) are unused spacers in the sheet.

/// Invoice metadata block, read column-wise starting at
/// [`INVOICE_COL_START`].
pub const BRAND_ROW: usize = 0;
pub const EXPORT_DATE_ROW: usize = 1;
pub const TOTAL_QTY_ROW: usize = 2;
pub const CONTAINER_INFO_ROW: usize = 3;
pub const INVOICE_TITLE_ROW: usize = 4;

/// First row of the line-item ledger, immediately after the metadata block.
pub const ITEM_ROW_START: usize = 5;

/// First invoice column (sheet column Q). Both the invoice metadata pass
/// and the per-item allocation pass must start here, or the positional
/// invoice/quantity correspondence breaks.
pub const INVOICE_COL_START: usize = 16;

/// Line-item identifying columns.
pub const PO_NO: usize = 0;
pub const WO_NO: usize = 1;
pub const PART_NO: usize = 2;
pub const CUSTOMER: usize = 3;
pub const ITEM_TYPE: usize = 4;
pub const SIZE: usize = 5;
pub const COLOR: usize = 7;

/// Line-item quantity columns (sheet columns I through O).
pub const PO_QTY: usize = 8;
pub const STOCK_IN: usize = 9;
pub const REMAINING: usize = 10;
pub const USED_FOR_SHIPMENT: usize = 11;
pub const READY_FOR_SHIPMENT: usize = 12;
pub const REWORK_QTY: usize = 13;
pub const FINISHED_GOODS_INVENTORY: usize = 14;

/// Sentinel token marking the end of valid ledger rows. The sheet's
/// maintainer places it below the data; matched whole-field,
/// case-insensitively, after trimming.
pub const LIMIT_SENTINEL: &str = "LIMIT";
