use axum::{
    Extension,
    extract::Query,
    response::Html,
};
use serde::Deserialize;

use crate::routes::{customer, inventory, sales};
use crate::session::Session;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct ShellQuery {
    view: Option<String>,
}

/// Full-page dashboard: sidebar plus the selected view. Unknown view names
/// fall back to the sales view.
#[axum::debug_handler]
pub async fn shell(
    Extension(session): Extension<Session>,
    Query(query): Query<ShellQuery>,
) -> Html<String> {
    let view = match query.view.as_deref() {
        Some("customer") => "customer",
        Some("inventory") => "inventory",
        _ => "sales",
    };
    let content = match view {
        "customer" => customer::render_default(),
        "inventory" => inventory::render(),
        _ => sales::render_sample(),
    };
    Html(views::layout::shell(&session.username, view, &content))
}
