use serde::{Deserialize, Serialize};

/// Binds the four semantic roles of the sales analysis to actual column names
/// of an uploaded dataset. Pure selection; the dataset itself is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub date_col: String,
    pub amount_col: String,
    pub category_col: String,
    pub region_col: String,
}

impl ColumnMapping {
    /// Positional default bindings. With fewer than four columns the later
    /// roles fall back to the last column instead of going out of range.
    pub fn default_for(columns: &[String]) -> Option<Self> {
        let last = columns.len().checked_sub(1)?;
        let pick = |i: usize| columns[i.min(last)].clone();
        Some(Self {
            date_col: pick(0),
            amount_col: pick(1),
            category_col: pick(2),
            region_col: pick(3),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn four_columns_bind_positionally() {
        let mapping = ColumnMapping::default_for(&columns(&["d", "a", "c", "r", "x"]))
            .expect("non-empty columns");
        assert_eq!(mapping.date_col, "d");
        assert_eq!(mapping.amount_col, "a");
        assert_eq!(mapping.category_col, "c");
        assert_eq!(mapping.region_col, "r");
    }

    #[test]
    fn short_column_sets_degrade_to_the_last_column() {
        let mapping = ColumnMapping::default_for(&columns(&["d", "a"])).expect("non-empty");
        assert_eq!(mapping.date_col, "d");
        assert_eq!(mapping.amount_col, "a");
        assert_eq!(mapping.category_col, "a");
        assert_eq!(mapping.region_col, "a");

        let single = ColumnMapping::default_for(&columns(&["only"])).expect("non-empty");
        assert_eq!(single.region_col, "only");
    }

    #[test]
    fn empty_column_set_has_no_default() {
        assert!(ColumnMapping::default_for(&[]).is_none());
    }
}
