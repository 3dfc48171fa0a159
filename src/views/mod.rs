use std::fmt::Write;

use v_htmlescape::escape;

use crate::dataset::{DataError, Value};

pub mod charts;
pub mod customer;
pub mod inventory;
pub mod layout;
pub mod login;
pub mod sales;

/// Inline error block with the remediation hint, rendered in place of the
/// section that failed.
pub fn error_block(err: &DataError) -> String {
    format!(
        r#"<div class="inline-error"><strong>{}</strong><span class="hint">{}</span></div>"#,
        escape(&err.to_string()),
        escape(err.hint()),
    )
}

pub fn metric_card(label: &str, value: &str) -> String {
    format!(
        r#"<div class="metric"><span class="metric-label">{}</span><span class="metric-value">{}</span></div>"#,
        escape(label),
        escape(value),
    )
}

/// Plain data table over dataset rows; every cell is escaped.
pub fn value_table(columns: &[String], rows: &[Vec<Value>]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for column in columns {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr></thead><tbody>");
    if rows.is_empty() {
        let _ = write!(
            html,
            r#"<tr><td colspan="{}" class="table-empty">No rows</td></tr>"#,
            columns.len().max(1)
        );
    }
    for row in rows {
        html.push_str("<tr>");
        for value in row {
            let _ = write!(html, "<td>{}</td>", escape(&value.to_string()));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Table over already-stringified rows, for report sections that are not
/// backed by a dataset slice.
pub fn text_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table><thead><tr>");
    for column in columns {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr></thead><tbody>");
    if rows.is_empty() {
        let _ = write!(
            html,
            r#"<tr><td colspan="{}" class="table-empty">No rows</td></tr>"#,
            columns.len().max(1)
        );
    }
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_table_escapes_cell_content() {
        let columns = vec!["note".to_string()];
        let rows = vec![vec![Value::Text("<script>alert(1)</script>".into())]];
        let html = value_table(&columns, &rows);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn error_block_carries_the_hint() {
        let html = error_block(&DataError::MissingColumn("amount".into()));
        assert!(html.contains("not found"));
        assert!(html.contains("Pick one of the columns"));
    }
}
