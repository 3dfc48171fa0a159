use std::collections::BTreeMap;

use crate::dataset::{
    DataError, Dataset,
    sample::{
        INVENTORY_CATEGORY_COL, INVENTORY_NAME_COL, INVENTORY_PRICE_COL, INVENTORY_STOCK_COL,
    },
};

/// Units below which an item shows up in the low-stock warning.
pub const LOW_STOCK_THRESHOLD: f64 = 50.0;
const TOP_STOCK_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct LowStockItem {
    pub name: String,
    pub stock: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport {
    pub low_stock: Vec<LowStockItem>,
    /// Sum of stock * unit price per category, sorted by label.
    pub value_by_category: Vec<(String, f64)>,
    /// The ten items holding the most units, in descending order.
    pub top_stock: Vec<(String, f64)>,
}

pub fn analyze_inventory(dataset: &Dataset) -> Result<InventoryReport, DataError> {
    let name_index = dataset.column_index(INVENTORY_NAME_COL)?;
    let stock_index = dataset.column_index(INVENTORY_STOCK_COL)?;
    let price_index = dataset.column_index(INVENTORY_PRICE_COL)?;
    let category_index = dataset.column_index(INVENTORY_CATEGORY_COL)?;

    let mut low_stock = Vec::new();
    let mut value_by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut stocked: Vec<(String, f64)> = Vec::with_capacity(dataset.len());

    for row in dataset.rows() {
        let name = row[name_index].to_string();
        let category = row[category_index].to_string();
        let stock = row[stock_index]
            .as_number()
            .ok_or_else(|| DataError::NotNumeric {
                column: INVENTORY_STOCK_COL.to_string(),
            })?;
        let price = row[price_index]
            .as_number()
            .ok_or_else(|| DataError::NotNumeric {
                column: INVENTORY_PRICE_COL.to_string(),
            })?;

        if stock < LOW_STOCK_THRESHOLD {
            low_stock.push(LowStockItem {
                name: name.clone(),
                stock,
                category: category.clone(),
            });
        }
        *value_by_category.entry(category).or_insert(0.0) += stock * price;
        stocked.push((name, stock));
    }

    stocked.sort_by(|a, b| b.1.total_cmp(&a.1));
    stocked.truncate(TOP_STOCK_ROWS);

    Ok(InventoryReport {
        low_stock,
        value_by_category: value_by_category.into_iter().collect(),
        top_stock: stocked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Value, sample::inventory_sample};

    #[test]
    fn low_stock_is_exactly_the_rows_below_the_threshold() {
        let dataset = inventory_sample();
        let report = analyze_inventory(&dataset).expect("sample is well-formed");

        let expected: Vec<String> = dataset
            .rows()
            .iter()
            .filter(|row| row[1].as_number().expect("stock is numeric") < LOW_STOCK_THRESHOLD)
            .map(|row| row[0].to_string())
            .collect();
        let listed: Vec<String> = report.low_stock.iter().map(|i| i.name.clone()).collect();
        assert_eq!(listed, expected);

        // Uniform stock over 0..500 makes some low-stock rows all but certain,
        // but never the whole table.
        assert!(!report.low_stock.is_empty());
        assert!(report.low_stock.len() < dataset.len());
    }

    #[test]
    fn top_stock_is_sorted_descending_and_capped_at_ten() {
        let report = analyze_inventory(&inventory_sample()).expect("sample is well-formed");
        assert_eq!(report.top_stock.len(), 10);
        for pair in report.top_stock.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn category_values_sum_stock_times_price() {
        let mut dataset = Dataset::new(vec![
            INVENTORY_NAME_COL.into(),
            INVENTORY_STOCK_COL.into(),
            INVENTORY_PRICE_COL.into(),
            INVENTORY_CATEGORY_COL.into(),
        ]);
        let rows = [
            ("a", 10.0, 5.0, "Food"),
            ("b", 2.0, 100.0, "Food"),
            ("c", 1.0, 30.0, "Books"),
        ];
        for (name, stock, price, category) in rows {
            dataset
                .push_row(vec![
                    Value::Text(name.into()),
                    Value::Number(stock),
                    Value::Number(price),
                    Value::Text(category.into()),
                ])
                .expect("row matches width");
        }

        let report = analyze_inventory(&dataset).expect("columns exist");
        assert_eq!(
            report.value_by_category,
            vec![("Books".into(), 30.0), ("Food".into(), 250.0)]
        );
    }

    #[test]
    fn missing_column_is_a_recoverable_error() {
        let dataset = Dataset::new(vec!["name".into(), "stock".into()]);
        assert_eq!(
            analyze_inventory(&dataset),
            Err(DataError::MissingColumn(INVENTORY_PRICE_COL.into()))
        );
    }
}
