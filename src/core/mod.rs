pub mod domain;
pub mod primitives;
pub mod scale;
pub mod scale_value;
pub mod types;

pub use domain::Domain;
pub use primitives::{datetime_to_epoch_ms, epoch_ms_to_datetime};
pub use scale::{AxisScale, LinearScale, TimeScale};
pub use scale_value::{ScaleValue, normalize_scale_value};
pub use types::{ClientRect, PlotOffset};
