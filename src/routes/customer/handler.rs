use axum::{extract::Query, response::Html};
use serde::Deserialize;
use tracing::warn;

use crate::analysis::analyze_customers;
use crate::analysis::customer::{AGE_DEFAULT_MAX, AGE_DEFAULT_MIN, AGE_SLIDER_MAX, AGE_SLIDER_MIN};
use crate::dataset::sample::customer_sample;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct AgeRangeQuery {
    age_min: Option<u32>,
    age_max: Option<u32>,
}

/// Customer view fragment. The age window is clamped to the slider bounds
/// and reordered if the user crosses the two inputs.
#[axum::debug_handler]
pub async fn customer_view(Query(query): Query<AgeRangeQuery>) -> Html<String> {
    let mut age_min = query
        .age_min
        .unwrap_or(AGE_DEFAULT_MIN)
        .clamp(AGE_SLIDER_MIN, AGE_SLIDER_MAX);
    let mut age_max = query
        .age_max
        .unwrap_or(AGE_DEFAULT_MAX)
        .clamp(AGE_SLIDER_MIN, AGE_SLIDER_MAX);
    if age_min > age_max {
        std::mem::swap(&mut age_min, &mut age_max);
    }
    Html(render(age_min, age_max))
}

pub fn render_default() -> String {
    render(AGE_DEFAULT_MIN, AGE_DEFAULT_MAX)
}

fn render(age_min: u32, age_max: u32) -> String {
    let dataset = customer_sample();
    match analyze_customers(&dataset, age_min, age_max) {
        Ok(report) => views::customer::customer_view(&report),
        Err(err) => {
            warn!(%err, "customer analysis failed");
            views::customer::customer_error(&err)
        }
    }
}
