use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::{Action, Config, Predict, Report, Train};

#[derive(Debug, Parser)]
#[command(
    name = "pricefit",
    about = "Mileage/Price Regression Trainer",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Path to the model parameter file
    #[arg(long = "model", value_name = "PATH", default_value = "model.json", global = true)]
    pub model_path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fit the regression line to a data file
    Train(TrainArgs),

    /// Estimate a price for a given mileage
    Predict(PredictArgs),

    /// Print fit statistics for the trained model against a data file
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct TrainArgs {
    /// CSV file with a header line and km,price rows
    #[arg(short = 'i', long = "input", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Step size for the gradient updates
    #[arg(short = 'l', long = "learning-rate", default_value_t = 1e-7)]
    pub learning_rate: f64,

    /// Number of passes over the sample set
    #[arg(short = 'e', long = "epochs", default_value_t = 1000)]
    pub epochs: usize,

    /// Starting intercept
    #[arg(long = "start-intercept", default_value_t = 1.0)]
    pub start_intercept: f64,

    /// Starting slope
    #[arg(long = "start-slope", default_value_t = 1.0)]
    pub start_slope: f64,

    /// Write a scatter plot with the fitted line to this file
    #[arg(short = 'p', long = "plot", value_name = "PNG", value_hint = ValueHint::FilePath)]
    pub plot: Option<PathBuf>,

    /// Write an animation of the converging fit to this file
    #[arg(long = "animate", value_name = "GIF", value_hint = ValueHint::FilePath)]
    pub animate: Option<PathBuf>,

    /// Print progress and refresh the animation every N epochs
    #[arg(long = "refresh-every", value_name = "N", default_value_t = 100)]
    pub refresh_every: usize,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Mileage to estimate a price for
    pub mileage: f64,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// CSV file with a header line and km,price rows
    #[arg(short = 'i', long = "input", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}

// -------- Map CLI -> Config/Action types --------

impl Cli {
    pub fn into_config(self) -> Config {
        let model_path = self.model_path;

        match self.command {
            Commands::Train(t) => Config {
                model_path,
                action: Action::Train(Train {
                    input: t.input,
                    learning_rate: t.learning_rate,
                    epochs: t.epochs,
                    start_intercept: t.start_intercept,
                    start_slope: t.start_slope,
                    plot: t.plot,
                    animate: t.animate,
                    refresh_every: t.refresh_every,
                }),
            },

            Commands::Predict(p) => {
                Config { model_path, action: Action::Predict(Predict { mileage: p.mileage }) }
            },

            Commands::Report(r) => {
                Config { model_path, action: Action::Report(Report { input: r.input }) }
            },
        }
    }
}
