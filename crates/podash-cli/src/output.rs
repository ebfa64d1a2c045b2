//! Output formatting module

use podash_domain::{DashboardModel, SummaryTotals};
use podash_types::{OutputFormat, Result};

/// Print the full dashboard: invoices, line items and totals.
pub fn output_model(output_format: OutputFormat, model: &DashboardModel) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(model)?);
        return Ok(());
    }

    println!("\nInvoices ({})", model.invoices.len());
    println!("============");
    println!(
        "{:<4} {:<14} {:<12} {:>10}  {:<14} {}",
        "#", "Brand", "Export Date", "Qty", "Container", "Invoice"
    );
    for (i, inv) in model.invoices.iter().enumerate() {
        println!(
            "{:<4} {:<14} {:<12} {:>10}  {:<14} {}",
            i + 1,
            inv.brand,
            inv.export_date,
            inv.total_qty,
            inv.container_info,
            inv.invoice_title
        );
    }

    println!("\nLine Items ({})", model.items.len());
    println!("==============");
    println!(
        "{:<12} {:<12} {:<12} {:>8} {:>9} {:>9} {:>7} {:>9}",
        "PO No", "Part No", "Customer", "PO Qty", "Stock In", "Remain", "Rework", "On Hand"
    );
    for item in &model.items {
        println!(
            "{:<12} {:<12} {:<12} {:>8} {:>9} {:>9} {:>7} {:>9}",
            item.po_no,
            item.part_no,
            item.customer,
            item.po_qty,
            item.stock_in,
            item.remaining,
            item.rework_qty,
            item.finished_goods_inventory
        );
    }

    print_totals(&model.summary);
    Ok(())
}

/// Print only the summary totals.
pub fn output_summary(output_format: OutputFormat, model: &DashboardModel) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&model.summary)?);
        return Ok(());
    }

    print_totals(&model.summary);
    Ok(())
}

fn print_totals(summary: &SummaryTotals) {
    println!("\nSummary");
    println!("=======");
    println!("PO Qty:     {}", summary.total_po_qty);
    println!("Stock In:   {}", summary.total_stock_in);
    println!("Remaining:  {}", summary.total_remaining);
    println!("Rework:     {}", summary.total_rework);
    println!("Inventory:  {}", summary.total_inventory);
}
