/// Data layer: sample files and the render table.
///
/// Architecture:
/// ```text
///  "harmonic 0.txt"            table.json / table.csv / built-in
///        │                               │
///        ▼                               ▼
///   ┌──────────┐                   ┌──────────┐
///   │  loader   │ → SampleSeries    │  table    │ → Vec<PlotDescriptor>
///   └──────────┘                   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod table;
