//! Host-facing panel facade.

mod json_contract;
mod panel;
mod panel_config;
mod render_frame_builder;

pub use json_contract::{CHART_MODEL_JSON_SCHEMA_V1, ChartModelJsonContractV1};
pub use panel::FlightChartPanel;
pub use panel_config::{PanelConfig, PanelStyle};
