//! chart-series-rs: per-point series styling and pane-view data preparation.
//!
//! The crate covers two paths of a Lightweight-Charts-style engine:
//! the style resolver (`core::bar_colorer`), which merges per-row overrides
//! with series configuration for one bar index, and the pane-view pipeline
//! (`views`), which extracts rows into screen items, projects the visible
//! ones through external scales and assembles renderer packets.

pub mod core;
pub mod error;
pub mod lwc;
pub mod render;
pub mod telemetry;
pub mod views;

pub use crate::core::{Series, SeriesBarColorer, SeriesKind, SeriesType};
pub use crate::error::{ChartError, ChartResult};
pub use crate::views::{CloudAreaPaneView, SeriesPaneView};
