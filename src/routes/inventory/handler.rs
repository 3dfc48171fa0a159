use axum::response::Html;
use tracing::warn;

use crate::analysis::analyze_inventory;
use crate::dataset::sample::inventory_sample;
use crate::views;

#[axum::debug_handler]
pub async fn inventory_view() -> Html<String> {
    Html(render())
}

pub fn render() -> String {
    let dataset = inventory_sample();
    match analyze_inventory(&dataset) {
        Ok(report) => views::inventory::inventory_view(&report),
        Err(err) => {
            warn!(%err, "inventory analysis failed");
            views::inventory::inventory_error(&err)
        }
    }
}
