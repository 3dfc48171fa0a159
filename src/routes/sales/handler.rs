use axum::{
    Extension,
    extract::{Form, Multipart, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use tracing::{info, warn};

use super::model::{AnalyzeRequest, SourceQuery};
use crate::AppState;
use crate::analysis::analyze_sales;
use crate::dataset::{ColumnMapping, DataError, Dataset, csv, sample};
use crate::error::AppError;
use crate::session::Session;
use crate::views;

/// Sales view fragment. `source=upload` switches the panel to the CSV
/// uploader; the default renders the analyzed sample dataset.
#[axum::debug_handler]
pub async fn sales_view(Query(query): Query<SourceQuery>) -> Html<String> {
    let html = match query.source.as_deref() {
        Some("upload") => {
            views::sales::sales_view(&views::sales::upload_form(None), true)
        }
        _ => views::sales::sales_view(&render_sample_panel(), false),
    };
    Html(html)
}

pub fn render_sample() -> String {
    views::sales::sales_view(&render_sample_panel(), false)
}

fn render_sample_panel() -> String {
    let dataset = sample::sales_sample();
    match ColumnMapping::default_for(dataset.columns()) {
        Some(mapping) => views::sales::sample_report(&analyze_sales(&dataset, &mapping)),
        None => views::sales::missing_upload(),
    }
}

/// Ingests the uploaded CSV, caches it in the session and renders the
/// column-mapping form. Malformed files turn into an inline error on the
/// upload panel instead of failing the request.
#[axum::debug_handler]
pub async fn upload_sales(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    multipart: Multipart,
) -> Html<String> {
    let bytes = match read_file_field(multipart).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(%err, "sales upload rejected");
            return Html(views::sales::upload_form(Some(&err)));
        }
    };

    match csv::parse_csv(&bytes) {
        Ok(dataset) => {
            info!(rows = dataset.len(), "sales CSV uploaded");
            let mapping = match ColumnMapping::default_for(dataset.columns()) {
                Some(mapping) => mapping,
                None => {
                    let err = DataError::Csv("the file has no columns".to_string());
                    return Html(views::sales::upload_form(Some(&err)));
                }
            };
            let panel = views::sales::mapping_panel(&dataset, &mapping, None);
            state.sessions.store_sales_upload(session.id, dataset).await;
            Html(panel)
        }
        Err(err) => {
            warn!(%err, "sales CSV failed to parse");
            Html(views::sales::upload_form(Some(&err)))
        }
    }
}

async fn read_file_field(mut multipart: Multipart) -> Result<Vec<u8>, DataError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DataError::Csv(e.to_string()))?
    {
        if field.name() == Some("file") {
            return field
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| DataError::Csv(e.to_string()));
        }
    }
    Err(DataError::Csv("no file was uploaded".to_string()))
}

/// Applies the submitted column bindings to the uploaded dataset: strict
/// date coercion, lenient numeric coercion, then the report. The coerced
/// dataset replaces the cached upload so the export matches the analysis.
#[axum::debug_handler]
pub async fn analyze_uploaded(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(req): Form<AnalyzeRequest>,
) -> Html<String> {
    let Some(mut dataset) = state.sessions.sales_upload(session.id).await else {
        return Html(views::sales::missing_upload());
    };
    let mapping = ColumnMapping::from(req);

    if let Err(err) = coerce_for_analysis(&mut dataset, &mapping) {
        warn!(%err, "uploaded dataset failed coercion");
        return Html(views::sales::mapping_panel(&dataset, &mapping, Some(&err)));
    }

    let report = analyze_sales(&dataset, &mapping);
    state.sessions.store_sales_upload(session.id, dataset).await;
    Html(views::sales::report_html(&report))
}

fn coerce_for_analysis(dataset: &mut Dataset, mapping: &ColumnMapping) -> Result<(), DataError> {
    dataset.coerce_date(&mapping.date_col)?;
    dataset.coerce_numeric(&mapping.amount_col)?;
    Ok(())
}

/// CSV download of the current sales dataset: the session's upload when one
/// exists, otherwise the synthetic sample.
#[axum::debug_handler]
pub async fn export_sales(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response, AppError> {
    let dataset = state
        .sessions
        .sales_upload(session.id)
        .await
        .unwrap_or_else(sample::sales_sample);

    let bytes =
        csv::to_csv(&dataset).map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sales_analysis_result.csv\"",
            ),
        ],
        bytes,
    )
        .into_response())
}
