use crate::model::PriceModel;
use crate::sample::SampleSet;

use plotters::coord::Shift;
use plotters::prelude::*;

use std::error::Error;
use std::path::Path;

pub const PLOT_WIDTH: u32 = 640;
pub const PLOT_HEIGHT: u32 = 480;
// delay between animation frames, in ms
const FRAME_DELAY: u32 = 100;

/// Scatter plot of the samples with the fitted line overlaid, written as
/// an animated GIF. One frame per `refresh` call, so refreshing during
/// training yields a small film of the fit converging.
pub struct FitPlot {
    area: DrawingArea<BitMapBackend<'static>, Shift>,
}

impl FitPlot {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let area = BitMapBackend::gif(path, (PLOT_WIDTH, PLOT_HEIGHT), FRAME_DELAY)?
            .into_drawing_area();
        Ok(Self { area })
    }

    pub fn refresh(&self, data: &SampleSet, model: &PriceModel) -> Result<(), Box<dyn Error>> {
        draw_frame(&self.area, data, model)
    }

    /// Ends the session; the encoder finalizes the file when the backend
    /// drops.
    pub fn close(self) {}
}

/// Single static frame, same layout as the animation.
pub fn draw_fit_plot<P: AsRef<Path>>(
    path: P,
    data: &SampleSet,
    model: &PriceModel,
) -> Result<(), Box<dyn Error>> {
    let area =
        BitMapBackend::new(path.as_ref(), (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    draw_frame(&area, data, model)
}

fn draw_frame(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    data: &SampleSet,
    model: &PriceModel,
) -> Result<(), Box<dyn Error>> {
    let (km_lo, km_hi) = data.km_range().ok_or("no samples to plot")?;
    let (price_lo, price_hi) = data.price_range().ok_or("no samples to plot")?;

    let (x0, x1) = pad_range(km_lo, km_hi);
    let (y0, y1) = pad_range(price_lo, price_hi);

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption("Mileage vs Price", ("sans-serif", 30).into_font())
        .margin(20)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(
        data.km
            .iter()
            .zip(&data.price)
            .map(|(&km, &price)| Circle::new((km, price), 5, BLUE.filled())),
    )?;

    // the fitted line only needs the two extreme mileages
    let line = vec![(km_lo, model.estimate(km_lo)), (km_hi, model.estimate(km_hi))];
    chart
        .draw_series(LineSeries::new(line, &RED))?
        .label("Regression Line")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// 5% buffer around the data, widened when the range collapses to a point
fn pad_range(lo: f64, hi: f64) -> (f64, f64) {
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::pad_range;

    #[test]
    fn test_pad_range() {
        let (lo, hi) = pad_range(0., 100.);

        assert_eq!(lo, -5.);
        assert_eq!(hi, 105.);
    }

    #[test]
    fn test_pad_range_single_point() {
        let (lo, hi) = pad_range(7., 7.);

        assert_eq!(lo, 6.);
        assert_eq!(hi, 8.);
    }
}
