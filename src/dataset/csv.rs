use csv::{ReaderBuilder, Writer};

use super::{DataError, Dataset, Value};

/// Parses an uploaded CSV into a dataset. The header row becomes the column
/// set; every cell starts as text (empty cells become nulls) and is coerced
/// later, once the user has mapped the columns.
pub fn parse_csv(bytes: &[u8]) -> Result<Dataset, DataError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);
    let columns = reader
        .headers()
        .map_err(|e| DataError::Csv(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut dataset = Dataset::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| DataError::Csv(e.to_string()))?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Value::Null
                } else {
                    Value::Text(field.to_string())
                }
            })
            .collect();
        dataset.push_row(row)?;
    }
    Ok(dataset)
}

/// Serializes a dataset as UTF-8 CSV with a header row.
pub fn to_csv(dataset: &Dataset) -> Result<Vec<u8>, DataError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record(dataset.columns())
        .map_err(|e| DataError::Csv(e.to_string()))?;
    for row in dataset.rows() {
        writer
            .write_record(row.iter().map(ToString::to_string))
            .map_err(|e| DataError::Csv(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| DataError::Csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample::sales_sample;

    #[test]
    fn parse_reads_headers_and_rows() {
        let input = b"date,amount,category\n2024-01-01,100,A\n2024-01-02,,B\n";
        let dataset = parse_csv(input).expect("well-formed CSV");
        assert_eq!(dataset.columns(), ["date", "amount", "category"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0][1], Value::Text("100".into()));
        assert_eq!(dataset.rows()[1][1], Value::Null);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let input = b"a,b\n1,2,3\n";
        assert!(parse_csv(input).is_err());
    }

    #[test]
    fn parse_rejects_invalid_utf8() {
        let input = b"a,b\n\xff\xfe,2\n";
        assert!(matches!(parse_csv(input), Err(DataError::Csv(_))));
    }

    #[test]
    fn export_round_trips_shape() {
        let dataset = sales_sample();
        let bytes = to_csv(&dataset).expect("serializable");
        let parsed = parse_csv(&bytes).expect("own output parses");
        assert_eq!(parsed.len(), dataset.len());
        assert_eq!(parsed.columns(), dataset.columns());
    }
}
