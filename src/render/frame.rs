use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// One drawable primitive, tagged with the chart feature it belongs to.
///
/// The variant order here mirrors paint order; a `SceneFrame` lists its
/// primitives in the exact order a sink must draw them.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenePrimitive {
    QuadrantRect(RectPrimitive),
    QuadrantLabel(TextPrimitive),
    AxisLine(LinePrimitive),
    AxisTick(LinePrimitive),
    AxisTickLabel(TextPrimitive),
    AxisTitle(TextPrimitive),
    BubbleCircle(CirclePrimitive),
    BubbleLabel(TextPrimitive),
    LegendSwatch(RectPrimitive),
    LegendLabel(TextPrimitive),
}

impl ScenePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::QuadrantRect(rect) | Self::LegendSwatch(rect) => rect.validate(),
            Self::AxisLine(line) | Self::AxisTick(line) => line.validate(),
            Self::BubbleCircle(circle) => circle.validate(),
            Self::QuadrantLabel(text)
            | Self::AxisTickLabel(text)
            | Self::AxisTitle(text)
            | Self::BubbleLabel(text)
            | Self::LegendLabel(text) => text.validate(),
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Identical chart snapshot + identical dimensions always materialize into
/// an identical frame; sinks perform a full clear-and-redraw from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub viewport: Viewport,
    pub primitives: Vec<ScenePrimitive>,
}

impl SceneFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: ScenePrimitive) {
        self.primitives.push(primitive);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Bubble circles in paint order (bottom-most first).
    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            ScenePrimitive::BubbleCircle(circle) => Some(circle),
            _ => None,
        })
    }
}
