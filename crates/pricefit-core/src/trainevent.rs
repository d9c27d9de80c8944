use crate::model::PriceModel;

/// Snapshot emitted after every epoch. `model` holds the parameters
/// after the update, `mse` is measured from the residuals the gradients
/// were computed from, so under the pre-update parameters.
#[derive(Clone, Copy, Debug)]
pub struct EpochUpdate {
    pub epoch: usize,
    pub model: PriceModel,
    pub mse: f64,
}

pub trait TrainEventSink {
    fn on_epoch(&mut self, ev: &EpochUpdate);
}

/// No-op sink for callers that do not track progress.
impl TrainEventSink for () {
    fn on_epoch(&mut self, _ev: &EpochUpdate) {}
}
