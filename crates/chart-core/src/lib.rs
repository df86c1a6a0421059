// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model, chart configuration, and bootstrapper.

pub mod bootstrap;
pub mod config;
pub mod dataset;
pub mod embed;
pub mod error;
pub mod format;
pub mod host;
pub mod render;
pub mod theme;

pub use bootstrap::{boot_profit_chart, BootOutcome};
pub use config::{line_chart_config, ChartConfig, SeriesSpec};
pub use dataset::ChartDataset;
pub use error::ChartError;
pub use format::format_kes;
pub use host::{DrawingSurface, HostElement, HostPage};
pub use render::{ChartHandle, ChartRenderer};
pub use theme::SeriesStyle;
