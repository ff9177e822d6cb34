use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Bubble, ChartData, Group, Margins, Viewport};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, SceneFrame, ScenePrimitive, TextHAlign,
    TextPrimitive,
};
use crate::scene::projection::ChartProjection;
use crate::scene::ticks::{axis_ticks, format_tick};

/// Fill used when a bubble's group id does not resolve or a CSS color fails
/// to parse.
pub const FALLBACK_GROUP_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);
/// Group label shown for bubbles whose group id does not resolve.
pub const UNKNOWN_GROUP_LABEL: &str = "Unknown";

const TEXT_PRIMARY: Color = Color::rgb(229.0 / 255.0, 231.0 / 255.0, 235.0 / 255.0);
const TEXT_MUTED: Color = Color::rgb(156.0 / 255.0, 163.0 / 255.0, 175.0 / 255.0);
const AXIS_COLOR: Color = TEXT_MUTED;

const BUBBLE_FILL_ALPHA: f64 = 0.7;
const BUBBLE_LABEL_OFFSET_PX: f64 = 15.0;
const QUADRANT_LABEL_INSET_PX: f64 = 20.0;
const AXIS_TICK_LENGTH_PX: f64 = 6.0;
const AXIS_TICK_TARGET_COUNT: usize = 8;
const LEGEND_SWATCH_PX: f64 = 14.0;

/// Materializes one chart snapshot into a flat, paint-ordered primitive
/// list.
///
/// The builder is pure: identical snapshot + identical dimensions yield an
/// identical frame. Soft data problems (dangling group ids, unparseable
/// colors, out-of-range sizes/positions) degrade the affected primitive
/// instead of failing the pass.
pub struct SceneBuilder;

impl SceneBuilder {
    pub fn build(data: &ChartData, viewport: Viewport, margins: Margins) -> ChartResult<SceneFrame> {
        let projection = ChartProjection::new(data, viewport, margins)?;
        Ok(Self::build_with(data, viewport, &projection))
    }

    pub fn build_with(data: &ChartData, viewport: Viewport, projection: &ChartProjection) -> SceneFrame {
        let mut frame = SceneFrame::new(viewport);

        push_quadrant_rects(&mut frame, data, projection);
        push_quadrant_labels(&mut frame, data, projection);
        push_axes(&mut frame, data, projection);

        let group_index: IndexMap<&str, &Group> = data
            .groups
            .iter()
            .map(|group| (group.id.as_str(), group))
            .collect();
        push_bubbles(&mut frame, data, projection, &group_index);
        push_legend(&mut frame, data, viewport, projection);

        debug!(
            bubbles = data.bubbles.len(),
            primitives = frame.primitives.len(),
            "scene frame built"
        );
        frame
    }
}

fn css_color_or_fallback(css: &str) -> Color {
    Color::parse_css(css).unwrap_or(FALLBACK_GROUP_COLOR)
}

fn push_quadrant_rects(frame: &mut SceneFrame, data: &ChartData, projection: &ChartProjection) {
    let plot = projection.plot;
    let split_x = projection.x_scale.to_pixel(projection.x_scale.domain_mid());
    let split_y = projection.y_scale.to_pixel(projection.y_scale.domain_mid());
    let colors = &data.quadrants.colors;

    // Four rects split at the midpoint pixel, covering the whole inner area.
    let rects = [
        (plot.left, plot.top, split_x - plot.left, split_y - plot.top, &colors.top_left),
        (split_x, plot.top, plot.right() - split_x, split_y - plot.top, &colors.top_right),
        (plot.left, split_y, split_x - plot.left, plot.bottom() - split_y, &colors.bottom_left),
        (split_x, split_y, plot.right() - split_x, plot.bottom() - split_y, &colors.bottom_right),
    ];

    for (x, y, width, height, css) in rects {
        frame.push(ScenePrimitive::QuadrantRect(RectPrimitive::new(
            x,
            y,
            width,
            height,
            css_color_or_fallback(css),
        )));
    }
}

fn push_quadrant_labels(frame: &mut SceneFrame, data: &ChartData, projection: &ChartProjection) {
    let plot = projection.plot;
    let split_x = projection.x_scale.to_pixel(projection.x_scale.domain_mid());
    let left_center = plot.left + (split_x - plot.left) / 2.0;
    let right_center = split_x + (plot.right() - split_x) / 2.0;
    let top_y = plot.top + QUADRANT_LABEL_INSET_PX;
    let bottom_y = plot.bottom() - QUADRANT_LABEL_INSET_PX;

    let labels = [
        (left_center, top_y, &data.quadrants.top_left),
        (right_center, top_y, &data.quadrants.top_right),
        (left_center, bottom_y, &data.quadrants.bottom_left),
        (right_center, bottom_y, &data.quadrants.bottom_right),
    ];

    for (x, y, text) in labels {
        if text.is_empty() {
            continue;
        }
        frame.push(ScenePrimitive::QuadrantLabel(TextPrimitive::new(
            text.clone(),
            x,
            y,
            12.0,
            TEXT_PRIMARY,
            TextHAlign::Center,
        )));
    }
}

fn push_axes(frame: &mut SceneFrame, data: &ChartData, projection: &ChartProjection) {
    let plot = projection.plot;

    frame.push(ScenePrimitive::AxisLine(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        1.0,
        AXIS_COLOR,
    )));
    frame.push(ScenePrimitive::AxisLine(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        1.0,
        AXIS_COLOR,
    )));

    let (x_min, x_max) = projection.x_scale.domain();
    for tick in axis_ticks(x_min, x_max, AXIS_TICK_TARGET_COUNT) {
        let pixel = projection.x_scale.to_pixel(tick);
        frame.push(ScenePrimitive::AxisTick(LinePrimitive::new(
            pixel,
            plot.bottom(),
            pixel,
            plot.bottom() + AXIS_TICK_LENGTH_PX,
            1.0,
            AXIS_COLOR,
        )));
        frame.push(ScenePrimitive::AxisTickLabel(TextPrimitive::new(
            format_tick(tick),
            pixel,
            plot.bottom() + AXIS_TICK_LENGTH_PX + 2.0,
            10.0,
            TEXT_MUTED,
            TextHAlign::Center,
        )));
    }

    let (y_min, y_max) = projection.y_scale.domain();
    for tick in axis_ticks(y_min, y_max, AXIS_TICK_TARGET_COUNT) {
        let pixel = projection.y_scale.to_pixel(tick);
        frame.push(ScenePrimitive::AxisTick(LinePrimitive::new(
            plot.left - AXIS_TICK_LENGTH_PX,
            pixel,
            plot.left,
            pixel,
            1.0,
            AXIS_COLOR,
        )));
        frame.push(ScenePrimitive::AxisTickLabel(TextPrimitive::new(
            format_tick(tick),
            plot.left - AXIS_TICK_LENGTH_PX - 2.0,
            pixel - 6.0,
            10.0,
            TEXT_MUTED,
            TextHAlign::Right,
        )));
    }

    if !data.x_axis.label.is_empty() {
        frame.push(ScenePrimitive::AxisTitle(TextPrimitive::new(
            data.x_axis.label.clone(),
            plot.left + plot.width / 2.0,
            plot.bottom() + 26.0,
            14.0,
            TEXT_MUTED,
            TextHAlign::Center,
        )));
    }
    if !data.y_axis.label.is_empty() {
        frame.push(ScenePrimitive::AxisTitle(
            TextPrimitive::new(
                data.y_axis.label.clone(),
                plot.left - 40.0,
                plot.top + plot.height / 2.0,
                14.0,
                TEXT_MUTED,
                TextHAlign::Center,
            )
            .rotated(-90.0),
        ));
    }
}

/// Bubble paint order: groups in insertion order with their bubbles in
/// insertion order, then bubbles whose group id does not resolve. All
/// circles precede all labels so no circle paints over a neighbor's text.
fn ordered_bubbles<'a>(
    data: &'a ChartData,
    group_index: &IndexMap<&str, &'a Group>,
) -> Vec<(&'a Bubble, Option<&'a Group>)> {
    let mut ordered = Vec::with_capacity(data.bubbles.len());
    for group in &data.groups {
        for bubble in data.bubbles.iter().filter(|bubble| bubble.group == group.id) {
            ordered.push((bubble, Some(group)));
        }
    }
    for bubble in &data.bubbles {
        if !group_index.contains_key(bubble.group.as_str()) {
            ordered.push((bubble, None));
        }
    }
    ordered
}

fn push_bubbles(
    frame: &mut SceneFrame,
    data: &ChartData,
    projection: &ChartProjection,
    group_index: &IndexMap<&str, &Group>,
) {
    let ordered = ordered_bubbles(data, group_index);

    for (bubble, group) in &ordered {
        let (center_x, center_y, radius) =
            projection.bubble_geometry(bubble.x, bubble.y, bubble.size);
        let (fill, label) = match group {
            Some(group) => (
                css_color_or_fallback(&group.color),
                group.name.as_str(),
            ),
            None => (FALLBACK_GROUP_COLOR, UNKNOWN_GROUP_LABEL),
        };

        frame.push(ScenePrimitive::BubbleCircle(CirclePrimitive {
            bubble_id: bubble.id.clone(),
            group_label: label.to_owned(),
            center_x,
            center_y,
            radius,
            fill_color: fill.with_alpha(fill.alpha * BUBBLE_FILL_ALPHA),
        }));
    }

    for (bubble, _) in &ordered {
        if bubble.name.is_empty() {
            continue;
        }
        let (center_x, center_y, radius) =
            projection.bubble_geometry(bubble.x, bubble.y, bubble.size);
        frame.push(ScenePrimitive::BubbleLabel(TextPrimitive::new(
            bubble.name.clone(),
            center_x,
            center_y + radius + BUBBLE_LABEL_OFFSET_PX,
            11.0,
            TEXT_MUTED,
            TextHAlign::Center,
        )));
    }
}

fn push_legend(
    frame: &mut SceneFrame,
    data: &ChartData,
    viewport: Viewport,
    projection: &ChartProjection,
) {
    if data.groups.is_empty() {
        return;
    }

    // Rough per-entry width from an average glyph advance; the legend does
    // not need typographic precision, only a stable centered layout.
    let entry_width = |group: &Group| LEGEND_SWATCH_PX + 6.0 + group.name.len() as f64 * 7.0;
    let total_width: f64 = data
        .groups
        .iter()
        .map(|group| entry_width(group) + 24.0)
        .sum::<f64>()
        - 24.0;

    let mut cursor_x = (f64::from(viewport.width) - total_width).max(0.0) / 2.0;
    let swatch_y = projection.plot.bottom() + 44.0;

    for group in &data.groups {
        frame.push(ScenePrimitive::LegendSwatch(RectPrimitive::new(
            cursor_x,
            swatch_y,
            LEGEND_SWATCH_PX,
            LEGEND_SWATCH_PX,
            css_color_or_fallback(&group.color),
        )));
        if !group.name.is_empty() {
            frame.push(ScenePrimitive::LegendLabel(TextPrimitive::new(
                group.name.clone(),
                cursor_x + LEGEND_SWATCH_PX + 6.0,
                swatch_y,
                12.0,
                TEXT_MUTED,
                TextHAlign::Left,
            )));
        }
        cursor_x += entry_width(group) + 24.0;
    }
}
