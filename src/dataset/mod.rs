use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

pub mod csv;
pub mod mapping;
pub mod sample;

pub use mapping::ColumnMapping;

/// Recoverable data-layer failures. Every variant carries enough context for
/// the views to render an inline error next to the section that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("column '{0}' not found")]
    MissingColumn(String),
    #[error("row has {got} values but the dataset has {expected} columns")]
    RowWidth { expected: usize, got: usize },
    #[error("column '{column}' contains a value that is not a date: '{value}'")]
    DateCoercion { column: String, value: String },
    #[error("column '{column}' is not numeric")]
    NotNumeric { column: String },
    #[error("could not read the CSV file: {0}")]
    Csv(String),
}

impl DataError {
    /// Remediation hint shown to the user next to the error message.
    pub fn hint(&self) -> &'static str {
        match self {
            DataError::MissingColumn(_) => "Pick one of the columns from the uploaded file.",
            DataError::RowWidth { .. } => {
                "Every row must have the same number of values as the header."
            }
            DataError::DateCoercion { .. } => {
                "Check the date format, e.g. 2024-01-31 or 2024/01/31."
            }
            DataError::NotNumeric { .. } => "Check that the column contains plain numbers.",
            DataError::Csv(_) => "Check that the file is UTF-8 encoded CSV with a header row.",
        }
    }
}

/// A single cell. Uploaded CSVs start as `Text` and are coerced per column;
/// generated samples are typed from the start.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Null,
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Null => Ok(()),
        }
    }
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Rows-by-named-columns table. Created per request, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), DataError> {
        if row.len() != self.columns.len() {
            return Err(DataError::RowWidth {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value>, DataError> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[index]))
    }

    pub fn head(&self, n: usize) -> &[Vec<Value>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Parses every value of the column as a date. Any unparseable value
    /// fails the whole coercion, mirroring strict date conversion.
    pub fn coerce_date(&mut self, name: &str) -> Result<(), DataError> {
        let index = self.column_index(name)?;
        let mut coerced = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let value = match &row[index] {
                Value::Date(d) => Value::Date(*d),
                Value::Null => Value::Null,
                Value::Text(s) => match parse_date(s) {
                    Some(d) => Value::Date(d),
                    None => {
                        return Err(DataError::DateCoercion {
                            column: name.to_string(),
                            value: s.clone(),
                        });
                    }
                },
                other => {
                    return Err(DataError::DateCoercion {
                        column: name.to_string(),
                        value: other.to_string(),
                    });
                }
            };
            coerced.push(value);
        }
        for (row, value) in self.rows.iter_mut().zip(coerced) {
            row[index] = value;
        }
        Ok(())
    }

    /// Parses the column as numbers; values that do not parse become nulls
    /// instead of failing the coercion.
    pub fn coerce_numeric(&mut self, name: &str) -> Result<(), DataError> {
        let index = self.column_index(name)?;
        for row in &mut self.rows {
            row[index] = match &row[index] {
                Value::Number(n) => Value::Number(*n),
                Value::Text(s) => match s.trim().parse::<f64>() {
                    Ok(n) => Value::Number(n),
                    Err(_) => Value::Null,
                },
                _ => Value::Null,
            };
        }
        Ok(())
    }

    /// Sum over the numeric values of the column, skipping nulls.
    pub fn numeric_sum(&self, name: &str) -> Result<f64, DataError> {
        let mut sum = 0.0;
        for value in self.column(name)? {
            match value {
                Value::Number(n) => sum += n,
                Value::Null => {}
                _ => {
                    return Err(DataError::NotNumeric {
                        column: name.to_string(),
                    });
                }
            }
        }
        Ok(sum)
    }

    /// Mean over the numeric values of the column; `None` when the column has
    /// no numeric values, so an empty dataset never divides by zero.
    pub fn numeric_mean(&self, name: &str) -> Result<Option<f64>, DataError> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for value in self.column(name)? {
            match value {
                Value::Number(n) => {
                    sum += n;
                    count += 1;
                }
                Value::Null => {}
                _ => {
                    return Err(DataError::NotNumeric {
                        column: name.to_string(),
                    });
                }
            }
        }
        Ok((count > 0).then(|| sum / count as f64))
    }

    /// Min and max of a date column; `None` when there are no date values.
    pub fn date_range(&self, name: &str) -> Result<Option<(NaiveDate, NaiveDate)>, DataError> {
        let mut range: Option<(NaiveDate, NaiveDate)> = None;
        for value in self.column(name)? {
            let date = match value {
                Value::Date(d) => *d,
                Value::Null => continue,
                other => {
                    return Err(DataError::DateCoercion {
                        column: name.to_string(),
                        value: other.to_string(),
                    });
                }
            };
            range = Some(match range {
                Some((min, max)) => (min.min(date), max.max(date)),
                None => (date, date),
            });
        }
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn text_dataset() -> Dataset {
        let mut dataset = Dataset::new(vec!["date".into(), "amount".into()]);
        for (d, a) in [("2024-01-05", "120"), ("2024/02/10", "80.5"), ("2024-02-11", "oops")] {
            dataset
                .push_row(vec![Value::Text(d.into()), Value::Text(a.into())])
                .expect("row matches width");
        }
        dataset
    }

    #[test]
    fn push_row_rejects_wrong_width() {
        let mut dataset = Dataset::new(vec!["a".into(), "b".into()]);
        let err = dataset.push_row(vec![Value::Null]).unwrap_err();
        assert_eq!(err, DataError::RowWidth { expected: 2, got: 1 });
    }

    #[test]
    fn coerce_date_parses_supported_formats() {
        let mut dataset = text_dataset();
        dataset.coerce_date("date").expect("all dates parse");
        assert_eq!(dataset.rows()[0][0], Value::Date(date(2024, 1, 5)));
        assert_eq!(dataset.rows()[1][0], Value::Date(date(2024, 2, 10)));
    }

    #[test]
    fn coerce_date_fails_on_unparseable_value_without_mutating() {
        let mut dataset = text_dataset();
        let err = dataset.coerce_date("amount").unwrap_err();
        assert!(matches!(err, DataError::DateCoercion { .. }));
        // The failed coercion must leave the column untouched.
        assert_eq!(dataset.rows()[0][1], Value::Text("120".into()));
    }

    #[test]
    fn coerce_numeric_turns_bad_values_into_nulls() {
        let mut dataset = text_dataset();
        dataset.coerce_numeric("amount").expect("column exists");
        assert_eq!(dataset.rows()[0][1], Value::Number(120.0));
        assert_eq!(dataset.rows()[1][1], Value::Number(80.5));
        assert_eq!(dataset.rows()[2][1], Value::Null);
    }

    #[test]
    fn numeric_stats_skip_nulls_and_handle_empty() {
        let mut dataset = text_dataset();
        dataset.coerce_numeric("amount").expect("column exists");
        assert_eq!(dataset.numeric_sum("amount"), Ok(200.5));
        assert_eq!(dataset.numeric_mean("amount"), Ok(Some(100.25)));

        let empty = Dataset::new(vec!["amount".into()]);
        assert_eq!(empty.numeric_sum("amount"), Ok(0.0));
        assert_eq!(empty.numeric_mean("amount"), Ok(None));
    }

    #[test]
    fn date_range_covers_min_and_max() {
        let mut dataset = text_dataset();
        dataset.coerce_date("date").expect("all dates parse");
        assert_eq!(
            dataset.date_range("date"),
            Ok(Some((date(2024, 1, 5), date(2024, 2, 11))))
        );
        assert_eq!(Dataset::new(vec!["date".into()]).date_range("date"), Ok(None));
    }

    #[test]
    fn missing_column_is_reported() {
        let dataset = text_dataset();
        assert_eq!(
            dataset.numeric_sum("price"),
            Err(DataError::MissingColumn("price".into()))
        );
    }
}
