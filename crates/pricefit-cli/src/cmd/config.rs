use pricefit_core::csv_parse::{read_samples, DataError};
use pricefit_core::fiterror::FitError;
use pricefit_core::model::{ModelIoError, PriceModel};
use pricefit_core::plot::{draw_fit_plot, FitPlot};
use pricefit_core::report::FitReport;
use pricefit_core::sample::SampleSet;
use pricefit_core::stats::model_mse;
use pricefit_core::train::{train, TrainSettings};
use pricefit_core::trainevent::{EpochUpdate, TrainEventSink};

use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug)]
pub struct Config {
    pub model_path: PathBuf,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    Train(Train),
    Predict(Predict),
    Report(Report),
}

#[derive(Debug, Clone)]
pub struct Train {
    pub input: PathBuf,
    pub learning_rate: f64,
    pub epochs: usize,
    pub start_intercept: f64,
    pub start_slope: f64,
    pub plot: Option<PathBuf>,
    pub animate: Option<PathBuf>,
    pub refresh_every: usize,
}

#[derive(Debug, Clone)]
pub struct Predict {
    pub mileage: f64,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub input: PathBuf,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("data error: {0}")]
    Data(#[from] DataError),
    #[error("model file error: {0}")]
    ModelIo(#[from] ModelIoError),
    #[error("fit error: {0}")]
    Fit(#[from] FitError),
    #[error("{0}")]
    Msg(String),
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        match &self.action {
            Action::Train(t) => self.run_train(t),
            Action::Predict(p) => self.run_predict(p),
            Action::Report(r) => self.run_report(r),
        }
    }
}

/* =================== Actions =================== */

impl Config {
    fn run_train(&self, t: &Train) -> Result<(), CmdError> {
        let samples = read_samples(&t.input)?;
        println!("Read {} samples from {}", samples.len(), t.input.display());

        let settings = TrainSettings {
            learning_rate: t.learning_rate,
            epochs: t.epochs,
            start: PriceModel::from_val(t.start_intercept, t.start_slope),
        };

        let animation = match &t.animate {
            Some(path) => {
                let plot = FitPlot::open(path).map_err(|e| {
                    CmdError::Msg(format!("Failed to open animation {}: {}", path.display(), e))
                })?;
                Some(plot)
            },
            None => None,
        };

        let mut progress = TrainProgress {
            samples: &samples,
            animation,
            every: t.refresh_every,
            epochs: t.epochs,
        };
        let model = train(&samples, &settings, &mut progress)?;

        println!("Fitted parameters: {}", model);
        if let Some(mse) = model_mse(&samples, &model) {
            println!("Final mse: {:.4}", mse);
        }

        if let Some(plot) = progress.animation.take() {
            plot.close();
        }
        if let Some(path) = &t.animate {
            println!("Animation saved to {}", path.display());
        }

        model.save(&self.model_path)?;
        println!("Model saved to {}", self.model_path.display());

        if let Some(path) = &t.plot {
            draw_fit_plot(path, &samples, &model).map_err(|e| {
                CmdError::Msg(format!("Failed to draw plot {}: {}", path.display(), e))
            })?;
            println!("Plot saved to {}", path.display());
        }

        Ok(())
    }

    fn run_predict(&self, p: &Predict) -> Result<(), CmdError> {
        let model = PriceModel::load(&self.model_path)?;
        let price = model.estimate(p.mileage);
        println!("Estimated price for {} km: {:.2}", p.mileage, price);
        Ok(())
    }

    fn run_report(&self, r: &Report) -> Result<(), CmdError> {
        let model = PriceModel::load(&self.model_path)?;
        let samples = read_samples(&r.input)?;
        let report = FitReport::from_data(&samples, model)?;
        println!("{}", report);
        Ok(())
    }
}

/* =================== Progress sink =================== */

struct TrainProgress<'a> {
    samples: &'a SampleSet,
    animation: Option<FitPlot>,
    every: usize,
    epochs: usize,
}

impl TrainEventSink for TrainProgress<'_> {
    fn on_epoch(&mut self, ev: &EpochUpdate) {
        if self.every == 0 {
            return;
        }
        let done = ev.epoch + 1;
        if done % self.every != 0 && done != self.epochs {
            return;
        }
        println!("epoch {}/{}: mse {:.4}", done, self.epochs, ev.mse);
        if let Some(plot) = &self.animation {
            if let Err(e) = plot.refresh(self.samples, &ev.model) {
                eprintln!("Failed to draw animation frame: {}", e);
            }
        }
    }
}
