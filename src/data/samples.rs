//! Built-in sample tables.
use crate::data::attribute::AttributeDomain;
use crate::data::dataset::Dataset;
use crate::error::Result;
use std::fmt::{self, Display, Formatter};

/// Label of the weather table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Play {
    Yes,
    No,
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Play::Yes => write!(f, "Yes"),
            Play::No => write!(f, "No"),
        }
    }
}

const WEATHER_ROWS: [([&str; 4], Play); 14] = [
    (["Sunny", "Hot", "High", "Weak"], Play::No),
    (["Sunny", "Hot", "High", "Strong"], Play::No),
    (["Overcast", "Hot", "High", "Weak"], Play::Yes),
    (["Rain", "Mild", "High", "Weak"], Play::Yes),
    (["Rain", "Cold", "Normal", "Weak"], Play::Yes),
    (["Rain", "Cold", "Normal", "Strong"], Play::No),
    (["Overcast", "Cold", "Normal", "Strong"], Play::Yes),
    (["Sunny", "Mild", "High", "Weak"], Play::No),
    (["Sunny", "Cold", "Normal", "Weak"], Play::Yes),
    (["Rain", "Mild", "Normal", "Weak"], Play::Yes),
    (["Sunny", "Mild", "Normal", "Strong"], Play::Yes),
    (["Overcast", "Mild", "High", "Strong"], Play::Yes),
    (["Overcast", "Hot", "Normal", "Weak"], Play::Yes),
    (["Rain", "Mild", "High", "Strong"], Play::No),
];

/// Domains of the weather table: Outlook, Temp, Humidity and Wind.
pub fn weather_attributes() -> Result<Vec<AttributeDomain>> {
    Ok(vec![
        AttributeDomain::new("Outlook", ["Sunny", "Overcast", "Rain"])?,
        AttributeDomain::new("Temp", ["Hot", "Mild", "Cold"])?,
        AttributeDomain::new("Humidity", ["High", "Normal"])?,
        AttributeDomain::new("Wind", ["Weak", "Strong"])?,
    ])
}

/// The classic 14-day "play tennis" table.
pub fn weather() -> Result<Dataset<Play>> {
    Dataset::from_rows(weather_attributes()?, &WEATHER_ROWS)
}
