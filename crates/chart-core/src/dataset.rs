// File: crates/chart-core/src/dataset.rs
// Summary: ChartDataset model with a validating parse boundary for the embedded JSON payload.

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// The payload carried in the page's `data-chart` attribute: one label per
/// x position and three parallel value arrays of the same length.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub dates: Vec<String>,
    pub profits: Vec<f64>,
    pub sales: Vec<f64>,
    pub expenses: Vec<f64>,
}

impl ChartDataset {
    /// Construct from raw parts, enforcing the parallel-array invariants.
    pub fn try_new(
        dates: Vec<String>,
        profits: Vec<f64>,
        sales: Vec<f64>,
        expenses: Vec<f64>,
    ) -> Result<Self, ChartError> {
        let ds = Self { dates, profits, sales, expenses };
        ds.validate()?;
        Ok(ds)
    }

    /// Parse the JSON payload and validate it. Malformed JSON, a length
    /// mismatch, or a non-finite value all reject here instead of being
    /// passed through to the charting library.
    pub fn from_json(raw: &str) -> Result<Self, ChartError> {
        let ds: Self = serde_json::from_str(raw)?;
        ds.validate()?;
        Ok(ds)
    }

    /// Serialize to the exact JSON shape the page contract embeds.
    pub fn to_embed_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of x positions.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    fn validate(&self) -> Result<(), ChartError> {
        let expected = self.dates.len();
        for (series, values) in [
            ("profits", &self.profits),
            ("sales", &self.sales),
            ("expenses", &self.expenses),
        ] {
            if values.len() != expected {
                return Err(ChartError::LengthMismatch {
                    series,
                    len: values.len(),
                    expected,
                });
            }
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFiniteValue { series, index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_payload() {
        let ds = ChartDataset::from_json(
            r#"{"dates":["Jan","Feb"],"profits":[1.0,2.0],"sales":[3.0,4.0],"expenses":[0.5,0.5]}"#,
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sales, vec![3.0, 4.0]);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = ChartDataset::try_new(
            vec!["Jan".into(), "Feb".into()],
            vec![1.0, 2.0],
            vec![3.0],
            vec![0.5, 0.5],
        )
        .unwrap_err();
        match err {
            ChartError::LengthMismatch { series, len, expected } => {
                assert_eq!(series, "sales");
                assert_eq!(len, 1);
                assert_eq!(expected, 2);
            }
            other => panic!("expected LengthMismatch, got {other}"),
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = ChartDataset::try_new(
            vec!["Jan".into()],
            vec![f64::NAN],
            vec![1.0],
            vec![1.0],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ChartError::NonFiniteValue { series: "profits", index: 0 }
        ));
    }

    #[test]
    fn embed_json_round_trips() {
        let ds = ChartDataset::try_new(
            vec!["Mon".into(), "Tue".into()],
            vec![120.0, 80.5],
            vec![300.0, 260.0],
            vec![180.0, 179.5],
        )
        .unwrap();
        let back = ChartDataset::from_json(&ds.to_embed_json().unwrap()).unwrap();
        assert_eq!(back, ds);
    }
}
