use crate::dataset::{
    DataError, Dataset, Value,
    sample::{CUSTOMER_AGE_COL, CUSTOMER_PURCHASES_COL, CUSTOMER_SPEND_COL},
};

pub const AGE_SLIDER_MIN: u32 = 20;
pub const AGE_SLIDER_MAX: u32 = 70;
pub const AGE_DEFAULT_MIN: u32 = 25;
pub const AGE_DEFAULT_MAX: u32 = 65;
pub const AGE_BINS: usize = 20;

/// Fixed-width histogram over the filtered age column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        if values.is_empty() || bins == 0 {
            return Self {
                lo: 0.0,
                hi: 0.0,
                counts: Vec::new(),
            };
        }
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = hi - lo;
        let mut counts = vec![0usize; bins];
        for &value in values {
            let index = if span == 0.0 {
                0
            } else {
                (((value - lo) / span) * bins as f64) as usize
            };
            // The max value lands exactly on the upper edge of the last bin.
            counts[index.min(bins - 1)] += 1;
        }
        Self { lo, hi, counts }
    }

    pub fn bin_width(&self) -> f64 {
        if self.counts.is_empty() {
            0.0
        } else {
            (self.hi - self.lo) / self.counts.len() as f64
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerReport {
    pub total_customers: usize,
    pub avg_spend: Option<f64>,
    pub avg_purchases: Option<f64>,
    pub age_min: u32,
    pub age_max: u32,
    pub filtered_count: usize,
    pub histogram: Histogram,
}

/// Summary metrics over the whole dataset, then an inclusive age filter and a
/// 20-bin age histogram over the filtered rows.
pub fn analyze_customers(
    dataset: &Dataset,
    age_min: u32,
    age_max: u32,
) -> Result<CustomerReport, DataError> {
    let avg_spend = dataset.numeric_mean(CUSTOMER_SPEND_COL)?;
    let avg_purchases = dataset.numeric_mean(CUSTOMER_PURCHASES_COL)?;

    let ages: Vec<f64> = dataset
        .column(CUSTOMER_AGE_COL)?
        .filter_map(Value::as_number)
        .filter(|age| *age >= age_min as f64 && *age <= age_max as f64)
        .collect();

    Ok(CustomerReport {
        total_customers: dataset.len(),
        avg_spend,
        avg_purchases,
        age_min,
        age_max,
        filtered_count: ages.len(),
        histogram: Histogram::from_values(&ages, AGE_BINS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample::customer_sample;

    fn age_dataset(ages: &[f64]) -> Dataset {
        let mut dataset = Dataset::new(vec![
            CUSTOMER_AGE_COL.into(),
            CUSTOMER_PURCHASES_COL.into(),
            CUSTOMER_SPEND_COL.into(),
        ]);
        for &age in ages {
            dataset
                .push_row(vec![
                    Value::Number(age),
                    Value::Number(1.0),
                    Value::Number(100.0),
                ])
                .expect("row matches width");
        }
        dataset
    }

    #[test]
    fn age_filter_is_inclusive_at_both_bounds() {
        let dataset = age_dataset(&[24.0, 25.0, 40.0, 65.0, 66.0]);
        let report = analyze_customers(&dataset, 25, 65).expect("columns exist");
        assert_eq!(report.filtered_count, 3);
        assert_eq!(report.total_customers, 5);
    }

    #[test]
    fn histogram_has_twenty_bins_covering_every_filtered_value() {
        let report =
            analyze_customers(&customer_sample(), AGE_DEFAULT_MIN, AGE_DEFAULT_MAX)
                .expect("sample is well-formed");
        assert_eq!(report.histogram.counts.len(), AGE_BINS);
        assert_eq!(report.histogram.total(), report.filtered_count);
        assert!(report.filtered_count > 0);
    }

    #[test]
    fn uniform_values_collapse_into_the_first_bin() {
        let histogram = Histogram::from_values(&[30.0, 30.0, 30.0], 20);
        assert_eq!(histogram.counts[0], 3);
        assert_eq!(histogram.counts.iter().sum::<usize>(), 3);
        assert_eq!(histogram.bin_width(), 0.0);
    }

    #[test]
    fn empty_filter_window_yields_an_empty_histogram() {
        let dataset = age_dataset(&[30.0]);
        let report = analyze_customers(&dataset, 40, 50).expect("columns exist");
        assert_eq!(report.filtered_count, 0);
        assert!(report.histogram.counts.is_empty());
    }

    #[test]
    fn sample_metrics_are_populated() {
        let report = analyze_customers(&customer_sample(), AGE_SLIDER_MIN, AGE_SLIDER_MAX)
            .expect("sample is well-formed");
        assert_eq!(report.total_customers, 1000);
        assert!(report.avg_spend.expect("spend present") > 0.0);
        assert!(report.avg_purchases.expect("purchases present") > 0.0);
    }
}
