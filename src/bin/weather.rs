use rusty_id3::data::attribute::Label;
use rusty_id3::data::dataset::Dataset;
use rusty_id3::data::loader::read_csv;
use rusty_id3::data::samples::weather;
use rusty_id3::metrics::confusion::ClassificationMetrics;
use rusty_id3::trees::classifier::Id3Classifier;
use rusty_id3::Id3Error;
use std::error::Error;
use std::fmt::Display;
use tracing::info;
use tracing_subscriber::EnvFilter;

const QUERY: [(&str, &str); 4] = [
    ("Outlook", "Rain"),
    ("Temp", "Mild"),
    ("Wind", "Strong"),
    ("Humidity", "Normal"),
];

const DEFAULT_LABEL_COLUMN: usize = 4;
const TRAIN_SIZE: f64 = 0.7;
const SPLIT_SEED: u64 = 42;

/// Command line: `[PATH [LABEL_COLUMN]] [NAME=VALUE ...]`.
#[derive(Debug, Default, PartialEq)]
struct Options {
    path: Option<String>,
    label_column: usize,
    query: Vec<(String, String)>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, Box<dyn Error>> {
    let mut options = Options {
        label_column: DEFAULT_LABEL_COLUMN,
        ..Default::default()
    };
    let mut args = args.into_iter().peekable();

    if let Some(path) = args.next_if(|arg| !arg.contains('=')) {
        options.path = Some(path);
        if let Some(column) = args.next_if(|arg| !arg.contains('=')) {
            options.label_column = column
                .parse()
                .map_err(|_| format!("invalid label column '{}'", column))?;
        }
    }

    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))?;
        options.query.push((name.to_string(), value.to_string()));
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Share of held-out rows the tree trained on the rest gets right.
///
/// Rows that reach a missing branch count as misses. Returns `None` when the
/// split leaves either side empty.
fn holdout_accuracy<L: Label>(dataset: &Dataset<L>) -> Result<Option<f64>, Box<dyn Error>> {
    let (train, test) = dataset.train_test_split(TRAIN_SIZE, Some(SPLIT_SEED))?;
    if train.nrows() == 0 || test.nrows() == 0 {
        return Ok(None);
    }

    let mut classifier = Id3Classifier::new();
    classifier.fit(&train)?;

    let correct = (0..test.nrows())
        .filter(|&row| match (test.instance(row), test.label(row)) {
            (Some(instance), Some(label)) => classifier
                .predict(&instance)
                .is_ok_and(|predicted| &predicted == label),
            _ => false,
        })
        .count();

    Ok(Some(correct as f64 / test.nrows() as f64))
}

fn run<L: Label + Display>(dataset: &Dataset<L>, pairs: &[(String, String)]) -> Result<String, Box<dyn Error>> {
    let mut classifier = Id3Classifier::new();
    classifier.fit(dataset)?;

    if let Some(root) = classifier.root() {
        info!(depth = root.depth(), leaves = root.n_leaves(), "trained tree");
    }

    let predictions = classifier.predict_dataset(dataset)?;
    let accuracy = classifier.accuracy(&dataset.y, &predictions)?;
    info!(accuracy, "training accuracy");

    if let Some(holdout) = holdout_accuracy(dataset)? {
        info!(accuracy = holdout, train_size = TRAIN_SIZE, "hold-out accuracy");
    }

    let query = if pairs.is_empty() {
        match dataset.query(&QUERY) {
            Ok(query) => query,
            Err(err) => {
                info!(reason = %err, "reference query doesn't apply, skipping");
                return Ok(format!("training accuracy {:.3}", accuracy));
            }
        }
    } else {
        let pairs = pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect::<Vec<_>>();
        dataset.query(&pairs)?
    };

    match classifier.predict(&query) {
        Ok(label) => Ok(label.to_string()),
        Err(Id3Error::NoMatchingPath { attribute }) => {
            Ok(format!("no learned branch at attribute '{}'", attribute))
        }
        Err(err) => Err(err.into()),
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let options = parse_args(std::env::args().skip(1))?;
    let output = match &options.path {
        Some(path) => run(&read_csv(path, options.label_column, true)?, &options.query)?,
        None => run(&weather()?, &options.query)?,
    };
    println!("{}", output);
    Ok(())
}

fn main() {
    init_logging();

    if let Err(err) = try_main() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_id3::data::loader::read_csv_from;

    const COLORS_CSV: &str = "\
Color,Size,Label
Red,Small,yes
Blue,Small,no
Red,Large,yes
Blue,Large,no
";

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn colors() -> Dataset<String> {
        read_csv_from(COLORS_CSV.as_bytes(), 2, true).unwrap()
    }

    #[test]
    fn test_parse_args_defaults() {
        let options = parse_args(args(&[])).unwrap();
        assert_eq!(options.path, None);
        assert_eq!(options.label_column, DEFAULT_LABEL_COLUMN);
        assert!(options.query.is_empty());
    }

    #[test]
    fn test_parse_args_path_column_and_query() {
        let options = parse_args(args(&["colors.csv", "2", "Color=Red", "Size=Large"])).unwrap();
        assert_eq!(
            options,
            Options {
                path: Some("colors.csv".to_string()),
                label_column: 2,
                query: vec![
                    ("Color".to_string(), "Red".to_string()),
                    ("Size".to_string(), "Large".to_string()),
                ],
            }
        );
    }

    #[test]
    fn test_parse_args_query_without_path() {
        let options = parse_args(args(&["Outlook=Sunny"])).unwrap();
        assert_eq!(options.path, None);
        assert_eq!(options.query, vec![("Outlook".to_string(), "Sunny".to_string())]);
    }

    #[test]
    fn test_parse_args_rejects_bad_label_column() {
        let result = parse_args(args(&["colors.csv", "label"]));
        assert_eq!(result.unwrap_err().to_string(), "invalid label column 'label'");
    }

    #[test]
    fn test_parse_args_rejects_malformed_pair() {
        assert!(parse_args(args(&["colors.csv", "2", "Color"])).is_err());
    }

    #[test]
    fn test_run_weather_reference_query() {
        let dataset = weather().unwrap();
        assert_eq!(run(&dataset, &[]).unwrap(), "No");
    }

    #[test]
    fn test_run_other_attributes_skips_reference_query() {
        let output = run(&colors(), &[]).unwrap();
        assert_eq!(output, "training accuracy 1.000");
    }

    #[test]
    fn test_run_other_attributes_with_query() {
        let pairs = vec![("Color".to_string(), "Blue".to_string())];
        assert_eq!(run(&colors(), &pairs).unwrap(), "no");
    }

    #[test]
    fn test_run_unknown_query_attribute() {
        let pairs = vec![("Outlook".to_string(), "Rain".to_string())];
        assert!(run(&colors(), &pairs).is_err());
    }

    #[test]
    fn test_holdout_accuracy_weather() {
        let accuracy = holdout_accuracy(&weather().unwrap()).unwrap().unwrap();
        assert!((0.0..=1.0).contains(&accuracy));
    }

    #[test]
    fn test_holdout_accuracy_single_row() {
        let dataset = read_csv_from("Color,Label\nRed,yes\n".as_bytes(), 1, true).unwrap();
        assert_eq!(holdout_accuracy(&dataset).unwrap(), None);
    }
}
