//! Rendering: sample file + labels → PNG next to the input.
//!
//! Every call loads the series, builds its own [`Figure`], rasterises it and
//! encodes it. Loading comes first, so a bad input never leaves an image
//! behind.

pub mod figure;
pub mod mathtext;

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use thiserror::Error;

use crate::color::ColorError;
use crate::data::loader::{load_series, SeriesError};
use crate::data::model::{output_path, PlotDescriptor};

pub use figure::Figure;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Style(#[from] ColorError),

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("failed to write '{path}': {source}", path = path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Render one descriptor and return the path of the written image.
pub fn render(descriptor: &PlotDescriptor) -> Result<PathBuf, RenderError> {
    let image = rasterize(descriptor)?;
    let out = output_path(&descriptor.path);
    save_png(&image, &out)?;
    log::info!("Rendered {} -> {}", descriptor.path.display(), out.display());
    Ok(out)
}

/// Same as [`render`], taking the file and both labels directly.
pub fn render_labels(
    path: &Path,
    energy_label: &str,
    potential_label: &str,
) -> Result<PathBuf, RenderError> {
    render(&PlotDescriptor::new(path, energy_label, potential_label))
}

/// Load and draw a descriptor without touching the output file.
pub fn rasterize(descriptor: &PlotDescriptor) -> Result<RgbImage, RenderError> {
    let series = load_series(&descriptor.path)?;
    log::debug!(
        "Loaded {} samples from {}",
        series.len(),
        descriptor.path.display()
    );
    Figure::new(descriptor, series).draw()
}

fn save_png(image: &RgbImage, path: &Path) -> Result<(), RenderError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
