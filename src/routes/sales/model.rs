use serde::Deserialize;

use crate::dataset::ColumnMapping;

#[derive(Debug, Deserialize)]
pub struct SourceQuery {
    pub source: Option<String>,
}

/// Column bindings submitted from the mapping form.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub date_col: String,
    pub amount_col: String,
    pub category_col: String,
    pub region_col: String,
}

impl From<AnalyzeRequest> for ColumnMapping {
    fn from(req: AnalyzeRequest) -> Self {
        ColumnMapping {
            date_col: req.date_col,
            amount_col: req.amount_col,
            category_col: req.category_col,
            region_col: req.region_col,
        }
    }
}
