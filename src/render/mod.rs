mod frame;
mod null_renderer;
mod primitives;

pub use frame::{SceneFrame, ScenePrimitive};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Sinks receive a fully materialized, deterministic `SceneFrame` and
/// perform a full clear-and-redraw in list order, so drawing code remains
/// isolated from chart domain and interaction logic.
pub trait RenderSink {
    fn render(&mut self, frame: &SceneFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
