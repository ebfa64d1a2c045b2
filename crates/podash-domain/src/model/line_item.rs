use serde::{Deserialize, Serialize};

/// One line of the production/inventory ledger.
///
/// Identifying fields default to the empty string and quantity fields to 0;
/// the sheet is noisy by assumption and a missing cell is never an error.
/// Quantities are signed: a negative raw value in the sheet is passed
/// through as-is, only missing/unparsable cells default to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionLineItem {
    pub po_no: String,
    pub wo_no: String,
    pub part_no: String,
    pub customer: String,
    pub item_type: String,
    pub size: String,
    pub color: String,

    /// Ordered quantity.
    pub po_qty: i64,
    /// Received/produced quantity.
    pub stock_in: i64,
    /// Outstanding quantity.
    pub remaining: i64,
    pub used_for_shipment: i64,
    pub ready_for_shipment: i64,
    /// Defective/reworked quantity.
    pub rework_qty: i64,
    /// On-hand quantity.
    pub finished_goods_inventory: i64,

    /// Quantity allocated to each invoice, positionally aligned with the
    /// parsed invoice block: `invoice_qtys[k]` belongs to invoice `k`.
    pub invoice_qtys: Vec<i64>,
}

impl ProductionLineItem {
    /// Quantity allocated to invoice `k`. Missing trailing columns read
    /// as 0, so callers may index by invoice count safely.
    pub fn invoice_qty(&self, k: usize) -> i64 {
        self.invoice_qtys.get(k).copied().unwrap_or(0)
    }
}
