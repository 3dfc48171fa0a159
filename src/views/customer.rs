use super::{charts, error_block, metric_card};
use crate::analysis::CustomerReport;
use crate::analysis::customer::{AGE_SLIDER_MAX, AGE_SLIDER_MIN};
use crate::dataset::DataError;
use crate::utils::{format_amount, format_count};

/// Customer view fragment: whole-dataset metrics, the age-range filter and
/// the filtered age histogram.
pub fn customer_view(report: &CustomerReport) -> String {
    let avg_spend = report
        .avg_spend
        .map(|v| format!("\u{a5}{}", format_amount(v)))
        .unwrap_or_else(|| "N/A".to_string());
    let avg_purchases = report
        .avg_purchases
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "N/A".to_string());

    let mut metrics = String::from(r#"<div class="metrics">"#);
    metrics.push_str(&metric_card(
        "Total customers",
        &format_count(report.total_customers),
    ));
    metrics.push_str(&metric_card("Average spend", &avg_spend));
    metrics.push_str(&metric_card("Average purchases", &avg_purchases));
    metrics.push_str("</div>");

    format!(
        r##"<section>
<h2>Customer analysis</h2>
{metrics}
<h3>Age range</h3>
<form class="controls" hx-get="/views/customer" hx-target="#content">
    <label>From
        <input type="number" name="age_min" min="{slider_min}" max="{slider_max}" value="{age_min}">
    </label>
    <label>To
        <input type="number" name="age_max" min="{slider_min}" max="{slider_max}" value="{age_max}">
    </label>
    <button class="primary" type="submit">Apply</button>
</form>
<h3>Age distribution</h3>
<p class="empty">{filtered} customers between {age_min} and {age_max}.</p>
{histogram}
</section>"##,
        slider_min = AGE_SLIDER_MIN,
        slider_max = AGE_SLIDER_MAX,
        age_min = report.age_min,
        age_max = report.age_max,
        filtered = format_count(report.filtered_count),
        histogram = charts::histogram(&report.histogram),
    )
}

pub fn customer_error(err: &DataError) -> String {
    format!(
        "<section><h2>Customer analysis</h2>{}</section>",
        error_block(err)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_customers;
    use crate::dataset::sample::customer_sample;

    #[test]
    fn view_renders_metrics_filter_and_histogram() {
        let report = analyze_customers(&customer_sample(), 25, 65).expect("sample is well-formed");
        let html = customer_view(&report);
        assert!(html.contains("Total customers"));
        assert!(html.contains(r#"name="age_min""#));
        assert!(html.contains(r#"value="25""#));
        assert!(html.contains("<svg"));
    }
}
