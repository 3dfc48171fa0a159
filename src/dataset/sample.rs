use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Gamma, Normal, Poisson};

use super::{Dataset, Value};

pub const SALES_DATE_COL: &str = "date";
pub const SALES_AMOUNT_COL: &str = "amount";
pub const SALES_CATEGORY_COL: &str = "category";
pub const SALES_REGION_COL: &str = "region";

pub const CUSTOMER_AGE_COL: &str = "age";
pub const CUSTOMER_PURCHASES_COL: &str = "purchases";
pub const CUSTOMER_SPEND_COL: &str = "total_spend";

pub const INVENTORY_NAME_COL: &str = "name";
pub const INVENTORY_STOCK_COL: &str = "stock";
pub const INVENTORY_PRICE_COL: &str = "unit_price";
pub const INVENTORY_CATEGORY_COL: &str = "category";

/// One year of daily sales. Fixed seed, so every call yields the same table.
pub fn sales_sample() -> Dataset {
    let mut rng = StdRng::seed_from_u64(42);
    let amounts = Normal::new(100_000.0, 20_000.0).expect("valid distribution parameters");
    let categories = ["A", "B", "C"];
    let regions = ["Tokyo", "Osaka", "Nagoya"];
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");

    let mut dataset = Dataset::new(vec![
        SALES_DATE_COL.to_string(),
        SALES_AMOUNT_COL.to_string(),
        SALES_CATEGORY_COL.to_string(),
        SALES_REGION_COL.to_string(),
    ]);
    for day in 0..365 {
        let row = vec![
            Value::Date(start + Duration::days(day)),
            Value::Number(amounts.sample(&mut rng)),
            Value::Text(categories[rng.gen_range(0..categories.len())].to_string()),
            Value::Text(regions[rng.gen_range(0..regions.len())].to_string()),
        ];
        dataset.push_row(row).expect("row matches column count");
    }
    dataset
}

/// 1000 customers with uniform ages, Poisson purchase counts and
/// gamma-distributed lifetime spend.
pub fn customer_sample() -> Dataset {
    let mut rng = StdRng::seed_from_u64(123);
    let purchases = Poisson::<f64>::new(5.0).expect("valid distribution parameters");
    let spend = Gamma::new(2.0, 50_000.0).expect("valid distribution parameters");
    let genders = ["female", "male"];

    let mut dataset = Dataset::new(vec![
        "customer_id".to_string(),
        CUSTOMER_AGE_COL.to_string(),
        CUSTOMER_PURCHASES_COL.to_string(),
        CUSTOMER_SPEND_COL.to_string(),
        "gender".to_string(),
    ]);
    for id in 1..=1000 {
        let row = vec![
            Value::Number(id as f64),
            Value::Number(rng.gen_range(20..70) as f64),
            Value::Number(purchases.sample(&mut rng).round()),
            Value::Number(spend.sample(&mut rng)),
            Value::Text(genders[rng.gen_range(0..genders.len())].to_string()),
        ];
        dataset.push_row(row).expect("row matches column count");
    }
    dataset
}

/// 100 SKUs with uniform stock counts and unit prices.
pub fn inventory_sample() -> Dataset {
    let mut rng = StdRng::seed_from_u64(456);
    let categories = ["Electronics", "Apparel", "Food", "Books"];

    let mut dataset = Dataset::new(vec![
        INVENTORY_NAME_COL.to_string(),
        INVENTORY_STOCK_COL.to_string(),
        INVENTORY_PRICE_COL.to_string(),
        INVENTORY_CATEGORY_COL.to_string(),
    ]);
    for sku in 1..=100 {
        let row = vec![
            Value::Text(format!("ITEM-{sku:03}")),
            Value::Number(rng.gen_range(0..500) as f64),
            Value::Number(rng.gen_range(100..10_000) as f64),
            Value::Text(categories[rng.gen_range(0..categories.len())].to_string()),
        ];
        dataset.push_row(row).expect("row matches column count");
    }
    dataset
}
