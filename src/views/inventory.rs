use crate::analysis::{InventoryReport, LOW_STOCK_THRESHOLD};
use crate::dataset::DataError;
use crate::utils::format_amount;

use super::{charts, error_block, text_table};

/// Inventory view fragment: low-stock warning, stock value by category and
/// the top-10 stocked items.
pub fn inventory_view(report: &InventoryReport) -> String {
    let warning = if report.low_stock.is_empty() {
        r#"<div class="ok">No items below the low-stock threshold.</div>"#.to_string()
    } else {
        let rows: Vec<Vec<String>> = report
            .low_stock
            .iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    format!("{}", item.stock),
                    item.category.clone(),
                ]
            })
            .collect();
        format!(
            r#"<div class="warn">{count} items are below {threshold} units of stock.</div>
{table}"#,
            count = rows.len(),
            threshold = LOW_STOCK_THRESHOLD,
            table = text_table(&["Item", "Stock", "Category"], &rows),
        )
    };

    let top_rows: Vec<Vec<String>> = report
        .top_stock
        .iter()
        .map(|(name, stock)| vec![name.clone(), format!("{stock}")])
        .collect();
    let by_category: Vec<(String, f64)> = report.value_by_category.clone();

    format!(
        r#"<section>
<h2>Inventory analysis</h2>
{warning}
<div class="columns">
    <div><h3>Stock value by category</h3>{chart}</div>
    <div><h3>Top 10 by stock count</h3>{top}</div>
</div>
<p class="empty">Stock value is stock count times unit price. Category total peaks at {yen}{peak}.</p>
</section>"#,
        chart = charts::bar_chart(&by_category),
        top = text_table(&["Item", "Stock"], &top_rows),
        yen = '\u{a5}',
        peak = format_amount(
            by_category
                .iter()
                .map(|(_, value)| *value)
                .fold(0.0, f64::max)
        ),
    )
}

pub fn inventory_error(err: &DataError) -> String {
    format!(
        "<section><h2>Inventory analysis</h2>{}</section>",
        error_block(err)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_inventory;
    use crate::dataset::sample::inventory_sample;

    #[test]
    fn view_reports_the_low_stock_count() {
        let report = analyze_inventory(&inventory_sample()).expect("sample is well-formed");
        let html = inventory_view(&report);
        assert!(html.contains("units of stock."));
        assert!(html.contains("Top 10 by stock count"));
        assert!(html.contains("<rect"));
    }
}
