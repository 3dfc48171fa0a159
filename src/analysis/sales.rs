use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::dataset::{ColumnMapping, DataError, Dataset, Value};

/// Summary cards above the detail table. Mean and period are `None` for
/// datasets that have no numeric amounts or no usable dates; the view renders
/// those as "N/A" instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesMetrics {
    pub total: f64,
    pub mean: Option<f64>,
    pub count: usize,
    pub period: Option<(NaiveDate, NaiveDate)>,
}

/// Result of the sales analysis. The two chart sections carry their own
/// results so one failed aggregation leaves the rest of the report intact.
#[derive(Debug, Clone)]
pub struct SalesReport {
    pub monthly: Result<Vec<(u32, f64)>, DataError>,
    pub by_category: Result<Vec<(String, f64)>, DataError>,
    pub metrics: SalesMetrics,
    pub preview_columns: Vec<String>,
    pub preview: Vec<Vec<Value>>,
}

pub fn analyze_sales(dataset: &Dataset, mapping: &ColumnMapping) -> SalesReport {
    SalesReport {
        monthly: monthly_totals(dataset, mapping),
        by_category: category_totals(dataset, mapping),
        metrics: metrics(dataset, mapping),
        preview_columns: dataset.columns().to_vec(),
        preview: dataset.head(10).to_vec(),
    }
}

/// Sum of the amount column grouped by calendar month of the date column.
fn monthly_totals(
    dataset: &Dataset,
    mapping: &ColumnMapping,
) -> Result<Vec<(u32, f64)>, DataError> {
    let date_index = dataset.column_index(&mapping.date_col)?;
    let amount_index = dataset.column_index(&mapping.amount_col)?;

    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for row in dataset.rows() {
        let date = match &row[date_index] {
            Value::Date(d) => *d,
            Value::Null => continue,
            other => {
                return Err(DataError::DateCoercion {
                    column: mapping.date_col.clone(),
                    value: other.to_string(),
                });
            }
        };
        if let Some(amount) = row[amount_index].as_number() {
            *totals.entry(date.month()).or_insert(0.0) += amount;
        }
    }
    Ok(totals.into_iter().collect())
}

/// Sum of the amount column per category label, sorted by label.
fn category_totals(
    dataset: &Dataset,
    mapping: &ColumnMapping,
) -> Result<Vec<(String, f64)>, DataError> {
    let category_index = dataset.column_index(&mapping.category_col)?;
    let amount_index = dataset.column_index(&mapping.amount_col)?;

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for row in dataset.rows() {
        let category = row[category_index].to_string();
        if let Some(amount) = row[amount_index].as_number() {
            *totals.entry(category).or_insert(0.0) += amount;
        }
    }
    Ok(totals.into_iter().collect())
}

fn metrics(dataset: &Dataset, mapping: &ColumnMapping) -> SalesMetrics {
    let amounts: Vec<f64> = dataset
        .column(&mapping.amount_col)
        .map(|column| column.filter_map(Value::as_number).collect())
        .unwrap_or_default();
    let total = amounts.iter().sum();
    let mean = (!amounts.is_empty()).then(|| total / amounts.len() as f64);
    SalesMetrics {
        total,
        mean,
        count: dataset.len(),
        period: dataset.date_range(&mapping.date_col).ok().flatten(),
    }
}
