use crate::fiterror::{FitError, FitResult};
use crate::model::PriceModel;
use crate::sample::SampleSet;
use crate::trainevent::{EpochUpdate, TrainEventSink};

#[derive(Clone, Copy, Debug)]
pub struct TrainSettings {
    pub learning_rate: f64,
    pub epochs: usize,
    pub start: PriceModel,
}

impl Default for TrainSettings {
    fn default() -> Self {
        Self { learning_rate: 1e-7, epochs: 1000, start: PriceModel::from_val(1., 1.) }
    }
}

/// Batch gradient descent on mean squared error. Runs exactly
/// `settings.epochs` passes, both parameters updated simultaneously from
/// gradients taken under the previous epoch's parameters. No convergence
/// check and no divergence check: a too-large learning rate walks the
/// parameters to NaN and that is the caller's problem.
pub fn train(
    data: &SampleSet,
    settings: &TrainSettings,
    sink: &mut dyn TrainEventSink,
) -> FitResult<PriceModel> {
    if data.km.len() != data.price.len() {
        return Err(FitError::LengthMismatch { len_x: data.km.len(), len_y: data.price.len() });
    }
    if data.is_empty() {
        return Err(FitError::EmptySampleSet);
    }

    let n = data.len() as f64;
    let mut model = settings.start;

    for epoch in 0..settings.epochs {
        let errors: Vec<f64> = data
            .km
            .iter()
            .zip(&data.price)
            .map(|(&km, &price)| model.estimate(km) - price)
            .collect();

        let grad0 = errors.iter().sum::<f64>() / n;
        let grad1 = errors.iter().zip(&data.km).map(|(&e, &km)| e * km).sum::<f64>() / n;

        model.intercept -= settings.learning_rate * grad0;
        model.slope -= settings.learning_rate * grad1;

        let mse = errors.iter().map(|e| e * e).sum::<f64>() / n;
        sink.on_epoch(&EpochUpdate { epoch, model, mse });
    }

    Ok(model)
}
