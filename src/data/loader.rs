//! Categorical CSV ingestion.
use crate::data::attribute::AttributeDomain;
use crate::data::dataset::Dataset;
use crate::error::{Id3Error, Result};
use ::csv::{Reader, ReaderBuilder, StringRecord, Trim};
use nalgebra::{DMatrix, DVector};
use std::io::Read;
use std::path::Path;

/// Reads a categorical dataset from a CSV file.
///
/// Every column except `label_column` becomes an attribute domain whose
/// values are collected in order of first appearance. Columns are named
/// after the header row, or `column<N>` without one.
///
/// # Errors
///
/// Fails on I/O and parse errors, ragged rows, or a label column outside the record.
pub fn read_csv<P: AsRef<Path>>(path: P, label_column: usize, has_headers: bool) -> Result<Dataset<String>> {
    let reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(Trim::All)
        .from_path(path)?;
    read_records(reader, label_column)
}

/// Same as [`read_csv`] for any reader.
pub fn read_csv_from<R: Read>(rdr: R, label_column: usize, has_headers: bool) -> Result<Dataset<String>> {
    let reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(Trim::All)
        .from_reader(rdr);
    read_records(reader, label_column)
}

fn domains_for(width: usize, label_column: usize, headers: Option<&StringRecord>) -> Result<Vec<AttributeDomain>> {
    if label_column >= width {
        return Err(Id3Error::UnknownAttribute(format!("column{}", label_column)));
    }
    Ok((0..width)
        .filter(|&i| i != label_column)
        .map(|i| {
            let name = headers
                .and_then(|record| record.get(i))
                .map_or_else(|| format!("column{}", i), str::to_string);
            AttributeDomain::with_name(name)
        })
        .collect())
}

fn read_records<R: Read>(mut reader: Reader<R>, label_column: usize) -> Result<Dataset<String>> {
    let mut domains = if reader.has_headers() {
        let headers = reader.headers()?.clone();
        Some(domains_for(headers.len(), label_column, Some(&headers))?)
    } else {
        None
    };

    let mut cells = Vec::new();
    let mut labels = Vec::new();

    for result in reader.records() {
        let record = result?;
        if domains.is_none() {
            domains = Some(domains_for(record.len(), label_column, None)?);
        }
        let row_domains = domains.get_or_insert_with(Vec::new);

        let label = record
            .get(label_column)
            .ok_or_else(|| Id3Error::UnknownAttribute(format!("column{}", label_column)))?;
        let features = record
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != label_column)
            .map(|(_, value)| value);

        for (domain, value) in row_domains.iter_mut().zip(features) {
            let index = match domain.value_index(value) {
                Some(index) => index,
                None => domain.push_value(value.to_string()),
            };
            cells.push(index);
        }
        labels.push(label.to_string());
    }

    let domains = domains.unwrap_or_default();
    let x = DMatrix::from_row_slice(labels.len(), domains.len(), &cells);
    Dataset::new(domains, x, DVector::from_vec(labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::classifier::Id3Classifier;
    use std::io::Write;

    const WEATHER_CSV: &str = "\
Outlook,Temp,Humidity,Wind,Play
Sunny,Hot,High,Weak,No
Sunny,Hot,High,Strong,No
Overcast,Hot,High,Weak,Yes
Rain,Mild,High,Weak,Yes
Rain,Cold,Normal,Weak,Yes
Rain,Cold,Normal,Strong,No
Overcast,Cold,Normal,Strong,Yes
Sunny,Mild,High,Weak,No
Sunny,Cold,Normal,Weak,Yes
Rain,Mild,Normal,Weak,Yes
Sunny,Mild,Normal,Strong,Yes
Overcast,Mild,High,Strong,Yes
Overcast,Hot,Normal,Weak,Yes
Rain,Mild,High,Strong,No
";

    #[test]
    fn test_read_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WEATHER_CSV.as_bytes()).unwrap();

        let dataset = read_csv(file.path(), 4, true).unwrap();

        assert_eq!(dataset.nrows(), 14);
        assert_eq!(dataset.n_attributes(), 4);
        assert_eq!(dataset.attribute(0).unwrap().name(), "Outlook");
        assert_eq!(
            dataset.attribute(0).unwrap().values(),
            &["Sunny".to_string(), "Overcast".to_string(), "Rain".to_string()]
        );
        assert_eq!(dataset.label(2).map(String::as_str), Some("Yes"));
    }

    #[test]
    fn test_read_csv_trains_like_builtin_table() {
        let dataset = read_csv_from(WEATHER_CSV.as_bytes(), 4, true).unwrap();
        let mut classifier = Id3Classifier::new();
        classifier.fit(&dataset).unwrap();

        let query = dataset
            .query(&[
                ("Outlook", "Rain"),
                ("Temp", "Mild"),
                ("Wind", "Strong"),
                ("Humidity", "Normal"),
            ])
            .unwrap();
        assert_eq!(classifier.predict(&query).unwrap(), "No");
    }

    #[test]
    fn test_read_csv_label_first_without_headers() {
        let data = "yes,red,small\nno,blue,small\nyes, red ,large\n";
        let dataset = read_csv_from(data.as_bytes(), 0, false).unwrap();

        assert_eq!(dataset.n_attributes(), 2);
        assert_eq!(dataset.attribute(0).unwrap().name(), "column1");
        assert_eq!(dataset.attribute(1).unwrap().name(), "column2");
        assert_eq!(dataset.attribute(0).unwrap().len(), 2);
        assert_eq!(dataset.x, DMatrix::from_row_slice(3, 2, &[0, 0, 1, 0, 0, 1]));
    }

    #[test]
    fn test_read_csv_label_column_out_of_range() {
        let data = "a,b\nc,d\n";
        let result = read_csv_from(data.as_bytes(), 5, false);
        assert!(matches!(result, Err(Id3Error::UnknownAttribute(_))));
    }

    #[test]
    fn test_read_csv_ragged_rows() {
        let data = "a,b,c\nd,e\n";
        let result = read_csv_from(data.as_bytes(), 2, false);
        assert!(matches!(result, Err(Id3Error::Csv(_))));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let result = read_csv("/nonexistent/weather.csv", 0, true);
        assert!(matches!(result, Err(Id3Error::Csv(_))));
    }
}
