use crate::model::PriceModel;
use crate::sample::SampleSet;

pub fn mse(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.is_empty() {
        return None;
    }

    let sum_sq: f64 = y.iter().zip(y_hat.iter()).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum();

    Some(sum_sq / y.len() as f64)
}

pub fn rmse(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    mse(y, y_hat).map(f64::sqrt)
}

pub fn r2_from_predictions(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() != y_hat.len() || y.len() < 2 {
        return None;
    }

    let y_mean = y.iter().sum::<f64>() / y.len() as f64;

    let ss_res: f64 = y.iter().zip(y_hat).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum();
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return None;
    }

    Some(1.0 - ss_res / ss_tot)
}

/// Mean squared error of a model over a sample set.
pub fn model_mse(data: &SampleSet, model: &PriceModel) -> Option<f64> {
    if data.km.len() != data.price.len() {
        return None;
    }
    let y_hat: Vec<f64> = data.km.iter().map(|&km| model.estimate(km)).collect();
    mse(&data.price, &y_hat)
}
