use crate::fiterror::{FitError, FitResult};
use crate::model::PriceModel;
use crate::sample::SampleSet;
use crate::stats::{r2_from_predictions, rmse};

use statrs::distribution::{ContinuousCDF, StudentsT};

use std::fmt;

/// Goodness-of-fit summary for a trained model against a sample set.
#[derive(Clone, Copy, Debug)]
pub struct FitReport {
    pub n: usize,
    pub model: PriceModel,
    pub mse: f64,
    pub rmse: f64,
    pub r2: f64,
    pub sigma: f64,
    pub p_value: f64,
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "samples: {}", self.n)?;
        writeln!(f, "{}", self.model)?;
        writeln!(f, "mse: {:.4}", self.mse)?;
        writeln!(f, "rmse: {:.4}", self.rmse)?;
        writeln!(f, "r2: {:.6}", self.r2)?;
        writeln!(f, "residual sigma: {:.4}", self.sigma)?;
        write!(f, "slope p-value: {:.6}", self.p_value)
    }
}

impl FitReport {
    pub fn from_data(data: &SampleSet, model: PriceModel) -> FitResult<Self> {
        if data.km.len() != data.price.len() {
            return Err(FitError::LengthMismatch { len_x: data.km.len(), len_y: data.price.len() });
        }
        if data.len() < 3 {
            return Err(FitError::NotEnoughPoints { len: data.len(), needed: 3 });
        }

        let n = data.len() as f64;
        let y_hat: Vec<f64> = data.km.iter().map(|&km| model.estimate(km)).collect();
        let residuals: Vec<f64> =
            data.price.iter().zip(&y_hat).map(|(&yi, &yhi)| yi - yhi).collect();
        let rss: f64 = residuals.iter().map(|r| r.powi(2)).sum();

        let mse_val = rss / n;
        let rmse_val = rmse(&data.price, &y_hat).unwrap_or(0.0);
        let r2 = r2_from_predictions(&data.price, &y_hat).unwrap_or(0.0);

        let x_mean = data.km.iter().copied().sum::<f64>() / n;
        let ss_xx: f64 = data.km.iter().map(|xi| (xi - x_mean).powi(2)).sum();

        // no variance in x, no meaningful regression
        if !ss_xx.is_finite() || ss_xx <= f64::EPSILON {
            return Err(FitError::DegenerateX);
        }
        let sigma = (rss / (n - 2.0)).sqrt();
        if !sigma.is_finite() {
            return Err(FitError::NonFiniteSigma);
        }

        let se_slope = sigma / ss_xx.sqrt();
        if !se_slope.is_finite() || se_slope <= 0.0 {
            // e.g. a perfect fit (sigma = 0)
            return Err(FitError::NonFiniteSE);
        }

        let t_stat = model.slope / se_slope;
        if !t_stat.is_finite() {
            return Err(FitError::NonFiniteTStat);
        }
        let dist = StudentsT::new(0.0, 1.0, n - 2.0)
            .map_err(|_| FitError::StatError("failed to construct StudentsT"))?;
        let p_value = 2.0 * (1.0 - dist.cdf(t_stat.abs()));

        Ok(Self {
            n: data.len(),
            model,
            mse: mse_val,
            rmse: rmse_val,
            r2,
            sigma,
            p_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::FitReport;
    use crate::fiterror::FitError;
    use crate::model::PriceModel;
    use crate::sample::SampleSet;

    #[test]
    fn test_near_linear_data() {
        // y = 1 + 2x with small fixed disturbances
        let samples = SampleSet::from_pairs(&[
            (0., 1.1),
            (1., 2.9),
            (2., 5.2),
            (3., 6.8),
            (4., 9.1),
            (5., 11.0),
        ]);
        let model = PriceModel::from_val(1., 2.);

        let report = FitReport::from_data(&samples, model).unwrap();

        assert_eq!(report.n, 6);
        assert!(report.r2 > 0.99);
        assert!(report.p_value < 0.001);
        assert!(report.rmse < 0.3);
    }

    #[test]
    fn test_perfect_fit_has_no_standard_error() {
        let samples = SampleSet::from_pairs(&[(0., 1.), (1., 3.), (2., 5.)]);
        let model = PriceModel::from_val(1., 2.);

        let result = FitReport::from_data(&samples, model);

        assert!(matches!(result, Err(FitError::NonFiniteSE)));
    }

    #[test]
    fn test_too_few_points() {
        let samples = SampleSet::from_pairs(&[(0., 1.), (1., 3.)]);

        let result = FitReport::from_data(&samples, PriceModel::new());

        assert!(matches!(result, Err(FitError::NotEnoughPoints { len: 2, needed: 3 })));
    }

    #[test]
    fn test_degenerate_mileage() {
        let samples = SampleSet::from_pairs(&[(7., 1.), (7., 2.), (7., 3.)]);

        let result = FitReport::from_data(&samples, PriceModel::new());

        assert!(matches!(result, Err(FitError::DegenerateX)));
    }
}
