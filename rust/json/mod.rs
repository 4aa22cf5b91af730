//! Allows serialization and deserialization to JSON, with the ``serde`` crate.

use crate::frequency::{Anchor, DateField, Frequency, Series};
use serde::{Deserialize, Serialize};

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl JSON for Frequency {}
impl JSON for Anchor {}
impl JSON for DateField {}
impl<T> JSON for Series<T> where T: Serialize + for<'de> Deserialize<'de> {}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_frequency_round_trip() {
        let all = [
            Frequency::Annual,
            Frequency::BusinessDaily,
            Frequency::Secondly,
            Frequency::Undefined,
        ];
        for freq in all.iter() {
            let json = freq.to_json().unwrap();
            assert_eq!(*freq, Frequency::from_json(&json).unwrap());
        }
        assert_eq!(Anchor::End, Anchor::from_json("\"End\"").unwrap());
    }

    #[test]
    fn test_series_round_trip() {
        let series = Series::try_new(
            Array1::from(vec![1.5, 2.5]),
            Array1::from(vec![false, true]),
            Frequency::Monthly,
            24_277,
        )
        .unwrap();
        let json = series.to_json().unwrap();
        assert_eq!(series, Series::<f64>::from_json(&json).unwrap());
    }
}
