//! Batch renderer for precomputed wavefunction samples.
//!
//! Each sample file holds two whitespace-separated lines (x, then ψ). A
//! [`PlotDescriptor`] names the file and the two labels that make up the plot
//! title; [`render::render`] turns it into `<file>.png`, and [`batch::run`]
//! walks a whole table of descriptors in order.

pub mod batch;
pub mod color;
pub mod data;
pub mod render;

pub use data::model::{PlotDescriptor, SampleSeries};
