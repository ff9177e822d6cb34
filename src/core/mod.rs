pub mod model;
pub mod scale;
pub mod types;

pub use model::{Axis, Bubble, ChartData, Group, QuadrantColors, QuadrantConfig};
pub use scale::{LinearScale, MAX_BUBBLE_RADIUS_PX, MIN_BUBBLE_RADIUS_PX, SizeScale};
pub use types::{Margins, PlotArea, Viewport};
