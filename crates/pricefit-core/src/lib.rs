pub mod csv_parse;
pub mod fiterror;
pub mod model;
pub mod plot;
pub mod report;
pub mod sample;
pub mod stats;
pub mod train;
pub mod trainevent;

pub use fiterror::{FitError, FitResult};
pub use model::PriceModel;
pub use sample::SampleSet;
pub use train::{train, TrainSettings};
