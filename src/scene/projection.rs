use crate::core::{ChartData, LinearScale, Margins, PlotArea, SizeScale, Viewport};
use crate::error::ChartResult;

/// All scale-dependent quantities for one render pass.
///
/// Re-derived from the current snapshot on every pass; nothing here is
/// cached across renders, so bubble radii and pixel positions always
/// reflect the latest data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartProjection {
    pub plot: PlotArea,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub size_scale: SizeScale,
}

impl ChartProjection {
    pub fn new(data: &ChartData, viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let plot = PlotArea::from_viewport(viewport, margins)?;

        let x_scale = LinearScale::new(
            "x",
            data.x_axis.min,
            data.x_axis.max,
            plot.left,
            plot.right(),
        )?;
        // Inverted pixel range: larger domain values render closer to the top.
        let y_scale = LinearScale::new(
            "y",
            data.y_axis.min,
            data.y_axis.max,
            plot.bottom(),
            plot.top,
        )?;
        let size_scale = SizeScale::from_bubbles(&data.bubbles);

        Ok(Self {
            plot,
            x_scale,
            y_scale,
            size_scale,
        })
    }

    /// Projected circle geometry for one bubble.
    ///
    /// Positions are clamped into the axis domains here, so coordinates that
    /// entered out of range through an import still land inside the plot.
    #[must_use]
    pub fn bubble_geometry(&self, x: f64, y: f64, size: f64) -> (f64, f64, f64) {
        let center_x = self.x_scale.to_pixel(self.x_scale.clamp(x));
        let center_y = self.y_scale.to_pixel(self.y_scale.clamp(y));
        (center_x, center_y, self.size_scale.radius_for(size))
    }
}
