//! Model digest for the insight prompt
//!
//! The insight collaborator receives a human-readable summary, not the raw
//! model: the totals plus the top items by on-hand inventory.

use podash_domain::DashboardModel;

/// Number of top-inventory items included in the digest.
const TOP_ITEMS: usize = 5;

/// Render the model into the textual digest sent to the insight client.
pub fn model_digest(model: &DashboardModel) -> String {
    let mut top: Vec<_> = model.items.iter().collect();
    top.sort_by(|a, b| b.finished_goods_inventory.cmp(&a.finished_goods_inventory));
    top.truncate(TOP_ITEMS);

    let mut out = String::new();
    out.push_str("Production Summary:\n");
    out.push_str(&format!("- Total PO Qty: {}\n", model.summary.total_po_qty));
    out.push_str(&format!("- Total Stock In: {}\n", model.summary.total_stock_in));
    out.push_str(&format!("- Total Remaining: {}\n", model.summary.total_remaining));
    out.push_str(&format!("- Total Rework: {}\n", model.summary.total_rework));
    out.push_str(&format!("- Current Inventory: {}\n", model.summary.total_inventory));
    out.push('\n');
    out.push_str("Top Items by Inventory:\n");
    for item in top {
        out.push_str(&format!(
            "- {} ({}): {}\n",
            item.part_no, item.customer, item.finished_goods_inventory
        ));
    }

    out
}
