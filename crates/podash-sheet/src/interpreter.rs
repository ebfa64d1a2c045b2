//! Sheet interpreter
//!
//! Walks tokenized rows under the positional conventions in [`layout`]
//! and builds the [`DashboardModel`]. Data quality problems never error:
//! a missing or unparsable cell degrades to the field's default. The only
//! control-flow branches are the blank-row skip and the LIMIT sentinel
//! stop, and totals are accumulated strictly in lockstep with row
//! acceptance so skipped rows can never leak into the sums.

use podash_domain::{DashboardModel, InvoiceRecord, ProductionLineItem, SummaryTotals};

use crate::layout;

/// Per-row scan decision for the line-item range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowScan {
    Accept,
    Skip,
    Stop,
}

/// Interpret tokenized rows as a dashboard model.
pub fn interpret(rows: &[Vec<String>]) -> DashboardModel {
    let invoices = parse_invoices(rows);
    let (items, summary) = parse_items(rows);

    DashboardModel {
        invoices,
        items,
        summary,
    }
}

/// Read the invoice metadata block column-wise from `INVOICE_COL_START`.
///
/// The block is assumed contiguous: the first empty brand cell in row 0
/// ends it. A real invoice with a genuinely blank brand name would
/// truncate the block here; that matches how the sheet is maintained and
/// is left as-is.
fn parse_invoices(rows: &[Vec<String>]) -> Vec<InvoiceRecord> {
    let mut invoices = Vec::new();
    if rows.len() < layout::ITEM_ROW_START {
        return invoices;
    }

    let brands = &rows[layout::BRAND_ROW];
    for col in layout::INVOICE_COL_START..brands.len() {
        if brands[col].is_empty() {
            break;
        }
        invoices.push(InvoiceRecord {
            brand: brands[col].clone(),
            export_date: cell(rows, layout::EXPORT_DATE_ROW, col).to_string(),
            total_qty: parse_qty(cell(rows, layout::TOTAL_QTY_ROW, col)),
            container_info: cell(rows, layout::CONTAINER_INFO_ROW, col).to_string(),
            invoice_title: cell(rows, layout::INVOICE_TITLE_ROW, col).to_string(),
        });
    }

    invoices
}

/// Scan the line-item range, folding totals over accepted rows only.
fn parse_items(rows: &[Vec<String>]) -> (Vec<ProductionLineItem>, SummaryTotals) {
    let mut items = Vec::new();
    let mut summary = SummaryTotals::default();

    for row in rows.iter().skip(layout::ITEM_ROW_START) {
        match scan_row(row) {
            RowScan::Stop => break,
            RowScan::Skip => continue,
            RowScan::Accept => {
                let item = parse_item(row);
                summary = summary.add_item(&item);
                items.push(item);
            }
        }
    }

    (items, summary)
}

/// Decide whether a row is an item, noise, or the end of the ledger.
fn scan_row(row: &[String]) -> RowScan {
    if row
        .iter()
        .any(|f| f.eq_ignore_ascii_case(layout::LIMIT_SENTINEL))
    {
        return RowScan::Stop;
    }

    // Stray blank row: no key fields and no ordered quantity. Other
    // columns may still hold leftovers (e.g. rework notes); they do not
    // make the row an item.
    let blank = field(row, layout::PO_NO).is_empty()
        && field(row, layout::WO_NO).is_empty()
        && field(row, layout::PART_NO).is_empty()
        && field(row, layout::PO_QTY).is_empty();
    if blank {
        return RowScan::Skip;
    }

    RowScan::Accept
}

fn parse_item(row: &[String]) -> ProductionLineItem {
    let invoice_qtys = row
        .iter()
        .skip(layout::INVOICE_COL_START)
        .map(|f| parse_qty(f))
        .collect();

    ProductionLineItem {
        po_no: field(row, layout::PO_NO).to_string(),
        wo_no: field(row, layout::WO_NO).to_string(),
        part_no: field(row, layout::PART_NO).to_string(),
        customer: field(row, layout::CUSTOMER).to_string(),
        item_type: field(row, layout::ITEM_TYPE).to_string(),
        size: field(row, layout::SIZE).to_string(),
        color: field(row, layout::COLOR).to_string(),
        po_qty: parse_qty(field(row, layout::PO_QTY)),
        stock_in: parse_qty(field(row, layout::STOCK_IN)),
        remaining: parse_qty(field(row, layout::REMAINING)),
        used_for_shipment: parse_qty(field(row, layout::USED_FOR_SHIPMENT)),
        ready_for_shipment: parse_qty(field(row, layout::READY_FOR_SHIPMENT)),
        rework_qty: parse_qty(field(row, layout::REWORK_QTY)),
        finished_goods_inventory: parse_qty(field(row, layout::FINISHED_GOODS_INVENTORY)),
        invoice_qtys,
    }
}

fn field(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

fn cell<'a>(rows: &'a [Vec<String>], row: usize, col: usize) -> &'a str {
    rows.get(row)
        .and_then(|r| r.get(col))
        .map(String::as_str)
        .unwrap_or("")
}

/// Parse a quantity cell. Thousands separators are stripped before
/// parsing; empty or unparsable cells read as 0. Only commas are treated
/// as separators — locales using periods or spaces are out of scope.
/// Sign is passed through unclamped.
fn parse_qty(s: &str) -> i64 {
    s.trim().replace(',', "").parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    /// A synthetic export matching the fixed layout: two invoice columns
    /// at Q/R, then ledger rows from row 5.
    fn sheet(item_rows: &[&str]) -> String {
        let mut s = String::new();
        // 16 leading commas put the invoice block at column Q (index 16)
        s.push_str(",,,,,,,,,,,,,,,,BrandA,BrandB\n");
        s.push_str(",,,,,,,,,,,,,,,,15/01/2024,2024-02-01\n");
        s.push_str(",,,,,,,,,,,,,,,,\"1,200\",800\n");
        s.push_str(",,,,,,,,,,,,,,,,40HQ,20GP\n");
        s.push_str(",,,,,,,,,,,,,,,,INV-001,INV-002\n");
        for r in item_rows {
            s.push_str(r);
            s.push('\n');
        }
        s
    }

    // PO,WO,PART,CUST,TYPE,SIZE,-,COLOR,POQTY,IN,REM,USED,READY,REWORK,FGI,-,Q,R
    const ITEM_A: &str = "PO-1,WO-1,P-100,Acme,Boot,42,,Black,\"1,000\",600,400,100,200,10,500,,300,200";
    const ITEM_B: &str = "PO-2,WO-2,P-200,Acme,Shoe,40,,Brown,50,50,0,0,50,0,50,,25";

    fn parse(item_rows: &[&str]) -> DashboardModel {
        interpret(&tokenize(&sheet(item_rows)))
    }

    #[test]
    fn test_invoice_block() {
        let model = parse(&[]);
        assert_eq!(model.invoices.len(), 2);

        let a = &model.invoices[0];
        assert_eq!(a.brand, "BrandA");
        assert_eq!(a.export_date, "15/01/2024");
        assert_eq!(a.total_qty, 1200);
        assert_eq!(a.container_info, "40HQ");
        assert_eq!(a.invoice_title, "INV-001");
        assert_eq!(model.invoices[1].total_qty, 800);
    }

    #[test]
    fn test_invoice_block_stops_at_empty_brand() {
        // A gap in row 0 truncates the block even if later columns hold data
        let mut text = sheet(&[]);
        text = text.replacen("BrandA,BrandB", "BrandA,,BrandC", 1);
        let model = interpret(&tokenize(&text));
        assert_eq!(model.invoices.len(), 1);
    }

    #[test]
    fn test_item_fields_and_thousands_separators() {
        let model = parse(&[ITEM_A]);
        assert_eq!(model.items.len(), 1);

        let item = &model.items[0];
        assert_eq!(item.po_no, "PO-1");
        assert_eq!(item.wo_no, "WO-1");
        assert_eq!(item.part_no, "P-100");
        assert_eq!(item.customer, "Acme");
        assert_eq!(item.item_type, "Boot");
        assert_eq!(item.size, "42");
        assert_eq!(item.color, "Black");
        assert_eq!(item.po_qty, 1000);
        assert_eq!(item.stock_in, 600);
        assert_eq!(item.remaining, 400);
        assert_eq!(item.used_for_shipment, 100);
        assert_eq!(item.ready_for_shipment, 200);
        assert_eq!(item.rework_qty, 10);
        assert_eq!(item.finished_goods_inventory, 500);
    }

    #[test]
    fn test_invoice_qtys_align_with_invoices() {
        let model = parse(&[ITEM_A, ITEM_B]);
        assert_eq!(model.items[0].invoice_qtys, vec![300, 200]);
        // ITEM_B's row ends one column short; the accessor reads 0
        assert_eq!(model.items[1].invoice_qty(0), 25);
        assert_eq!(model.items[1].invoice_qty(1), 0);
    }

    #[test]
    fn test_limit_sentinel_stops_scan() {
        let model = parse(&[ITEM_A, ITEM_B, "limit", ITEM_A]);
        assert_eq!(model.items.len(), 2);
        // nothing at or after the sentinel reaches the totals
        assert_eq!(model.summary.total_po_qty, 1050);
    }

    #[test]
    fn test_limit_sentinel_in_any_column() {
        let model = parse(&[ITEM_A, ",,,,,LIMIT", ITEM_B]);
        assert_eq!(model.items.len(), 1);
    }

    #[test]
    fn test_limit_must_match_whole_field() {
        // "LIMITED" is a legitimate customer name, not the sentinel
        let row = "PO-3,WO-3,P-300,LIMITED,Shoe,40,,Red,10,10,0,0,10,0,10";
        let model = parse(&[row]);
        assert_eq!(model.items.len(), 1);
    }

    #[test]
    fn test_blank_key_row_skipped_even_with_other_data() {
        // no PO/WO/part/PO-qty, but a rework value at column N
        let stray = ",,,,,,,,,,,,,7,";
        let model = parse(&[ITEM_A, stray, ITEM_B]);
        assert_eq!(model.items.len(), 2);
        assert_eq!(model.summary.total_rework, 10);
    }

    #[test]
    fn test_row_with_any_key_field_accepted() {
        // WO number alone is enough to count as an item
        let thin = ",WO-9,,,,,,,,,,,,,";
        let model = parse(&[thin]);
        assert_eq!(model.items.len(), 1);
        assert_eq!(model.items[0].wo_no, "WO-9");
        assert_eq!(model.items[0].po_qty, 0);
    }

    #[test]
    fn test_totals_cover_exactly_accepted_items() {
        let model = parse(&[ITEM_A, ITEM_B]);
        let expected = SummaryTotals::from_items(&model.items);
        assert_eq!(model.summary, expected);
        assert_eq!(model.summary.total_po_qty, 1050);
        assert_eq!(model.summary.total_stock_in, 650);
        assert_eq!(model.summary.total_remaining, 400);
        assert_eq!(model.summary.total_rework, 10);
        assert_eq!(model.summary.total_inventory, 550);
    }

    #[test]
    fn test_unparsable_quantities_default_to_zero() {
        let row = "PO-4,WO-4,P-400,Acme,Boot,42,,Black,abc,,n/a,,,,";
        let model = parse(&[row]);
        let item = &model.items[0];
        assert_eq!(item.po_qty, 0);
        assert_eq!(item.stock_in, 0);
        assert_eq!(item.remaining, 0);
    }

    #[test]
    fn test_negative_quantities_pass_through() {
        let row = "PO-5,WO-5,P-500,Acme,Boot,42,,Black,100,120,-20,,,,";
        let model = parse(&[row]);
        assert_eq!(model.items[0].remaining, -20);
        assert_eq!(model.summary.total_remaining, -20);
    }

    #[test]
    fn test_short_sheet_has_no_invoices() {
        let rows = tokenize("a,b\nc,d\n");
        let model = interpret(&rows);
        assert!(model.invoices.is_empty());
        assert!(model.items.is_empty());
    }

    #[test]
    fn test_end_to_end_synthetic_sheet() {
        // one valid row, one blank-key row, then the sentinel
        let model = parse(&[ITEM_A, ",,,,,,,,,,,,,,", "LIMIT,,,"]);
        assert_eq!(model.invoices.len(), 2);
        assert_eq!(model.items.len(), 1);
        assert_eq!(
            model.summary,
            SummaryTotals::from_items(&model.items)
        );
        assert_eq!(model.summary.total_po_qty, 1000);
        assert_eq!(model.summary.total_inventory, 500);
    }
}
