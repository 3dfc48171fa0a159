use std::fmt::Write;

use v_htmlescape::escape;

use super::{error_block, metric_card, value_table};
use crate::analysis::SalesReport;
use crate::dataset::{ColumnMapping, DataError, Dataset};
use crate::utils::format_amount;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_label(month: u32) -> String {
    MONTHS
        .get(month as usize - 1)
        .map(|m| m.to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Sales view fragment: data-source selector plus the active panel.
pub fn sales_view(inner: &str, upload_selected: bool) -> String {
    let (sample_checked, upload_checked) = if upload_selected {
        ("", " checked")
    } else {
        (" checked", "")
    };
    format!(
        r##"<section>
<h2>Sales analysis</h2>
<form class="controls">
    <label style="flex-direction: row; align-items: center; gap: 0.5rem;">
        <input type="radio" name="source" value="sample"{sample_checked}
               hx-get="/views/sales?source=sample" hx-target="#sales-panel">
        Use sample data
    </label>
    <label style="flex-direction: row; align-items: center; gap: 0.5rem;">
        <input type="radio" name="source" value="upload"{upload_checked}
               hx-get="/views/sales?source=upload" hx-target="#sales-panel">
        Upload a CSV file
    </label>
</form>
<div id="sales-panel">
{inner}
</div>
</section>"##
    )
}

/// Full report: the two chart sections render independently, so a failure in
/// one leaves the other and the metrics intact.
pub fn report_html(report: &SalesReport) -> String {
    let monthly = match &report.monthly {
        Ok(points) => {
            let labelled: Vec<(String, f64)> = points
                .iter()
                .map(|(month, total)| (month_label(*month), *total))
                .collect();
            super::charts::line_chart(&labelled)
        }
        Err(err) => error_block(err),
    };
    let by_category = match &report.by_category {
        Ok(bars) => super::charts::bar_chart(bars),
        Err(err) => error_block(err),
    };

    let mean = report
        .metrics
        .mean
        .map(|m| format!("\u{a5}{}", format_amount(m)))
        .unwrap_or_else(|| "N/A".to_string());
    let period = report
        .metrics
        .period
        .map(|(min, max)| format!("{} - {}", min.format("%Y-%m-%d"), max.format("%Y-%m-%d")))
        .unwrap_or_else(|| "N/A".to_string());

    let mut metrics = String::from(r#"<div class="metrics">"#);
    metrics.push_str(&metric_card(
        "Total sales",
        &format!("\u{a5}{}", format_amount(report.metrics.total)),
    ));
    metrics.push_str(&metric_card("Average sale", &mean));
    metrics.push_str(&metric_card("Rows", &report.metrics.count.to_string()));
    metrics.push_str(&metric_card("Period", &period));
    metrics.push_str("</div>");

    format!(
        r#"<div class="columns">
    <div><h3>Monthly sales</h3>{monthly}</div>
    <div><h3>Sales by category</h3>{by_category}</div>
</div>
<h3>Summary</h3>
{metrics}
<h3>Detail data (first 10 rows)</h3>
{preview}
<p><a href="/views/sales/export">Download the dataset as CSV</a></p>"#,
        preview = value_table(&report.preview_columns, &report.preview),
    )
}

pub fn sample_report(report: &SalesReport) -> String {
    format!(
        r#"<p class="empty">Using the generated sample dataset.</p>
{}"#,
        report_html(report)
    )
}

/// CSV upload form, with the ingest error of a failed previous attempt.
pub fn upload_form(error: Option<&DataError>) -> String {
    let error_html = error.map(error_block).unwrap_or_default();
    format!(
        r##"{error_html}<form class="controls" hx-post="/views/sales/upload" hx-target="#sales-panel" hx-encoding="multipart/form-data">
    <label>Sales CSV file
        <input type="file" name="file" accept=".csv" required>
    </label>
    <button class="primary" type="submit">Load file</button>
</form>
<p class="empty">Expected columns, e.g.: date, amount, category, region.</p>"##
    )
}

/// Post-upload panel: success banner, preview, and the column-mapping form
/// with positional defaults.
pub fn mapping_panel(
    dataset: &Dataset,
    mapping: &ColumnMapping,
    error: Option<&DataError>,
) -> String {
    let error_html = error.map(error_block).unwrap_or_default();
    let column_list = dataset
        .columns()
        .iter()
        .map(|c| escape(c).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let preview = value_table(dataset.columns(), dataset.head(5));

    let select = |name: &str, label: &str, selected: &str| {
        let mut options = String::new();
        for column in dataset.columns() {
            let marker = if column == selected { " selected" } else { "" };
            let _ = write!(
                options,
                r#"<option value="{value}"{marker}>{value}</option>"#,
                value = escape(column),
            );
        }
        format!(r#"<label>{label}<select name="{name}">{options}</select></label>"#)
    };

    format!(
        r##"{error_html}<div class="ok">Loaded {rows} rows.</div>
<p><strong>Columns:</strong> {column_list}</p>
<details><summary>Data preview</summary>{preview}</details>
<h3>Column bindings</h3>
<form class="controls" hx-post="/views/sales/analyze" hx-target="#sales-panel">
    {date}
    {amount}
    {category}
    {region}
    <button class="primary" type="submit">Run analysis</button>
</form>"##,
        rows = dataset.len(),
        date = select("date_col", "Date column", &mapping.date_col),
        amount = select("amount_col", "Amount column", &mapping.amount_col),
        category = select("category_col", "Category column", &mapping.category_col),
        region = select("region_col", "Region column", &mapping.region_col),
    )
}

/// Shown when analyze or export is requested before any upload.
pub fn missing_upload() -> String {
    r#"<div class="warn">Upload a CSV file first, then run the analysis.</div>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_sales;
    use crate::dataset::sample::{self, sales_sample};

    fn sample_mapping() -> ColumnMapping {
        ColumnMapping {
            date_col: sample::SALES_DATE_COL.into(),
            amount_col: sample::SALES_AMOUNT_COL.into(),
            category_col: sample::SALES_CATEGORY_COL.into(),
            region_col: sample::SALES_REGION_COL.into(),
        }
    }

    #[test]
    fn report_shows_charts_metrics_and_export_link() {
        let dataset = sales_sample();
        let html = report_html(&analyze_sales(&dataset, &sample_mapping()));
        assert!(html.contains("<polyline"));
        assert!(html.contains("Total sales"));
        assert!(html.contains("/views/sales/export"));
        // 10 preview rows plus the header row.
        assert_eq!(html.matches("<tr>").count(), 11);
    }

    #[test]
    fn failed_section_renders_inline_without_dropping_the_rest() {
        let mut report = analyze_sales(&sales_sample(), &sample_mapping());
        report.monthly = Err(DataError::MissingColumn("date".into()));
        let html = report_html(&report);
        assert!(html.contains("inline-error"));
        assert!(html.contains("Sales by category"));
        assert!(html.contains("<rect"));
    }

    #[test]
    fn mapping_panel_preselects_the_defaults() {
        let dataset = sales_sample();
        let mapping = ColumnMapping::default_for(dataset.columns()).expect("columns exist");
        let html = mapping_panel(&dataset, &mapping, None);
        assert!(html.contains(r#"<option value="date" selected>"#));
        assert!(html.contains("Loaded 365 rows."));
    }

    #[test]
    fn source_selector_marks_the_active_source() {
        let html = sales_view("inner", true);
        assert!(html.contains(r#"value="upload" checked"#));
    }
}
