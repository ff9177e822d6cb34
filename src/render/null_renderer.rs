use crate::error::ChartResult;
use crate::render::{RenderSink, SceneFrame, ScenePrimitive};

/// No-op sink used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl RenderSink for NullRenderer {
    fn render(&mut self, frame: &SceneFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut rects = 0;
        let mut lines = 0;
        let mut circles = 0;
        let mut texts = 0;
        for primitive in &frame.primitives {
            match primitive {
                ScenePrimitive::QuadrantRect(_) | ScenePrimitive::LegendSwatch(_) => rects += 1,
                ScenePrimitive::AxisLine(_) | ScenePrimitive::AxisTick(_) => lines += 1,
                ScenePrimitive::BubbleCircle(_) => circles += 1,
                ScenePrimitive::QuadrantLabel(_)
                | ScenePrimitive::AxisTickLabel(_)
                | ScenePrimitive::AxisTitle(_)
                | ScenePrimitive::BubbleLabel(_)
                | ScenePrimitive::LegendLabel(_) => texts += 1,
            }
        }

        self.render_count += 1;
        self.last_rect_count = rects;
        self.last_line_count = lines;
        self.last_circle_count = circles;
        self.last_text_count = texts;
        Ok(())
    }
}
