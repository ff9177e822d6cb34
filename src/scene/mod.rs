mod builder;
mod projection;
mod ticks;

pub use builder::{FALLBACK_GROUP_COLOR, SceneBuilder, UNKNOWN_GROUP_LABEL};
pub use projection::ChartProjection;
pub use ticks::{axis_ticks, format_tick};
