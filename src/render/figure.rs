use image::RgbImage;
use plotters::prelude::*;

use crate::color;
use crate::data::model::{PlotDescriptor, SampleSeries};

use super::mathtext::to_unicode;
use super::RenderError;

/// Pixel size of every image: matplotlib's default 6.4" × 4.8" at 100 dpi.
pub const FIGURE_SIZE: (u32, u32) = (640, 480);

/// Vertical axis label (mathtext source form).
pub const Y_LABEL: &str = r"ψ ($\AA^{-1/2}$)";

/// Horizontal axis label (mathtext source form).
pub const X_LABEL: &str = r"x ($\AA$)";

/// Fraction of the data span left empty on each side of both axes.
const MARGIN: f64 = 0.05;

// ---------------------------------------------------------------------------
// Figure – one owned plotting surface per render
// ---------------------------------------------------------------------------

/// Everything that ends up in one image. Built fresh for every render and
/// dropped afterwards, so nothing carries over between images.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: SampleSeries,
}

impl Figure {
    pub fn new(descriptor: &PlotDescriptor, series: SampleSeries) -> Self {
        Figure {
            title: descriptor.title(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            series,
        }
    }

    /// Rasterise into an RGB image of [`FIGURE_SIZE`].
    pub fn draw(&self) -> Result<RgbImage, RenderError> {
        let (width, height) = FIGURE_SIZE;
        let mut buf = vec![0u8; (width * height * 3) as usize];
        let line = color::line_color()?;

        {
            let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            let (x_min, x_max) = pad(self.series.x_range())?;
            let (y_min, y_max) = pad(self.series.y_range())?;

            let mut chart = ChartBuilder::on(&root)
                .caption(to_unicode(&self.title), ("sans-serif", 16))
                .margin(12)
                .x_label_area_size(40)
                .y_label_area_size(64)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(draw_err)?;

            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc(to_unicode(&self.x_label))
                .y_desc(to_unicode(&self.y_label))
                .axis_desc_style(("sans-serif", 14))
                .draw()
                .map_err(draw_err)?;

            chart
                .draw_series(LineSeries::new(self.series.points(), line.stroke_width(2)))
                .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }

        RgbImage::from_raw(width, height, buf)
            .ok_or_else(|| RenderError::Draw("pixel buffer does not match figure size".into()))
    }
}

/// Add [`MARGIN`] on both sides. The span is taken in halves so that data
/// reaching the ends of the `f64` range does not overflow; an axis whose
/// padded width is still not finite cannot be drawn.
fn pad((min, max): (f64, f64)) -> Result<(f64, f64), RenderError> {
    let half_span = max / 2.0 - min / 2.0;
    let margin = half_span * 2.0 * MARGIN;
    let (lo, hi) = (min - margin, max + margin);
    if (hi / 2.0 - lo / 2.0).is_finite() && (hi - lo).is_finite() {
        Ok((lo, hi))
    } else {
        Err(RenderError::Draw(format!(
            "axis range {min:e}..{max:e} is too wide to draw"
        )))
    }
}

fn draw_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}
