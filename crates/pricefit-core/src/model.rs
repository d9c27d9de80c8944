use serde::{Deserialize, Serialize};

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ModelIoError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fitted line `price = intercept + slope * km`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PriceModel {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for PriceModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "intercept: {}, slope: {}", self.intercept, self.slope)
    }
}

impl Default for PriceModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceModel {
    pub fn new() -> Self {
        Self { intercept: 0., slope: 0. }
    }

    pub fn from_val(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Predicted price for a mileage under the current parameters.
    pub fn estimate(&self, km: f64) -> f64 {
        self.intercept + self.slope * km
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelIoError> {
        let serialized = serde_json::to_string(self)?;
        fs::write(path, serialized)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelIoError> {
        let serialized = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&serialized)?)
    }
}

#[cfg(test)]
mod tests {
    use super::PriceModel;

    #[test]
    fn test_estimate() {
        let model = PriceModel::from_val(2., 3.);

        assert_eq!(model.estimate(0.), 2.);
        assert_eq!(model.estimate(4.), 14.);
    }

    #[test]
    fn test_new_is_flat() {
        let model = PriceModel::new();

        assert_eq!(model.estimate(100000.), 0.);
    }

    #[test]
    fn test_load_from_json() {
        let model: PriceModel =
            serde_json::from_str(r#"{"intercept":8500.0,"slope":-0.021}"#).unwrap();

        assert_eq!(model.intercept, 8500.);
        assert_eq!(model.slope, -0.021);
    }
}
