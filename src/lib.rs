//! flight-chart-rs: headless interaction and series alignment for flight-data
//! charts.
//!
//! The crate splits a chart panel into a pan/zoom/box-zoom state machine
//! (`interaction`), a multi-series decimation and time-alignment pipeline
//! (`series`) and a backend-agnostic render frame (`render`). `api` wires them
//! into a single [`FlightChartPanel`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod series;
pub mod telemetry;

pub use api::{FlightChartPanel, PanelConfig};
pub use error::{ChartError, ChartResult};
