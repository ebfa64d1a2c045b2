use serde::{Deserialize, Serialize};

use super::ProductionLineItem;

/// Scalar sums over the accepted line items. Derived data, rebuilt on
/// every parse; never mutated independently of the item list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub total_po_qty: i64,
    pub total_stock_in: i64,
    pub total_remaining: i64,
    pub total_rework: i64,
    pub total_inventory: i64,
}

impl SummaryTotals {
    /// Fold one accepted item into the totals.
    pub fn add_item(mut self, item: &ProductionLineItem) -> Self {
        self.total_po_qty += item.po_qty;
        self.total_stock_in += item.stock_in;
        self.total_remaining += item.remaining;
        self.total_rework += item.rework_qty;
        self.total_inventory += item.finished_goods_inventory;
        self
    }

    /// Totals over a full item list. Equivalent to folding `add_item`
    /// over every element.
    pub fn from_items(items: &[ProductionLineItem]) -> Self {
        items.iter().fold(Self::default(), |acc, i| acc.add_item(i))
    }
}
