use quadchart::core::{Bubble, ChartData, Margins, Viewport};
use quadchart::render::{Color, ScenePrimitive};
use quadchart::scene::{FALLBACK_GROUP_COLOR, SceneBuilder, UNKNOWN_GROUP_LABEL};

fn viewport() -> Viewport {
    Viewport::new(800, 600)
}

fn build(data: &ChartData) -> quadchart::render::SceneFrame {
    SceneBuilder::build(data, viewport(), Margins::default()).expect("scene build")
}

#[test]
fn identical_input_yields_identical_frames() {
    let data = ChartData::sample();
    let first = build(&data);
    let second = build(&data);
    assert_eq!(first, second);
}

#[test]
fn frame_passes_validation() {
    let frame = build(&ChartData::sample());
    frame.validate().expect("valid frame");
    assert!(!frame.is_empty());
}

#[test]
fn quadrant_rects_tile_the_inner_area() {
    let data = ChartData::sample();
    let frame = build(&data);

    let rects: Vec<_> = frame
        .primitives
        .iter()
        .filter_map(|primitive| match primitive {
            ScenePrimitive::QuadrantRect(rect) => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 4);

    // Symmetric domains split the plot exactly in half; the four rects must
    // cover the full inner area with no gap or overlap.
    let margins = Margins::default();
    let plot_width = 800.0 - margins.left - margins.right;
    let plot_height = 600.0 - margins.top - margins.bottom;
    let area: f64 = rects.iter().map(|rect| rect.width * rect.height).sum();
    assert!((area - plot_width * plot_height).abs() <= 1e-6);

    for rect in &rects {
        assert!((rect.width - plot_width / 2.0).abs() <= 1e-6);
        assert!((rect.height - plot_height / 2.0).abs() <= 1e-6);
    }
}

#[test]
fn bubble_circle_count_matches_data() {
    let data = ChartData::sample();
    let frame = build(&data);
    assert_eq!(frame.circles().count(), data.bubbles.len());
}

#[test]
fn bubbles_paint_grouped_in_declaration_order() {
    let data = ChartData::sample();
    let frame = build(&data);

    // Helpdesk is declared first, so all of its circles precede every
    // sysadmin circle in paint order.
    let labels: Vec<_> = frame.circles().map(|circle| circle.group_label.as_str()).collect();
    let first_sysadmin = labels
        .iter()
        .position(|label| *label == "System Administrators")
        .expect("sysadmin circles present");

    assert!(labels[..first_sysadmin].iter().all(|label| *label == "Helpdesk"));
    assert!(
        labels[first_sysadmin..]
            .iter()
            .all(|label| *label == "System Administrators")
    );
}

#[test]
fn dangling_group_renders_fallback_color_and_unknown_label() {
    let mut data = ChartData::sample();
    data.bubbles.push(Bubble {
        id: "orphan".to_owned(),
        name: "Orphan".to_owned(),
        x: 5.0,
        y: 5.0,
        size: 10.0,
        group: "no-such-group".to_owned(),
    });

    let frame = build(&data);
    let orphan = frame
        .circles()
        .find(|circle| circle.bubble_id == "orphan")
        .expect("orphan circle present");

    assert_eq!(orphan.group_label, UNKNOWN_GROUP_LABEL);
    assert_eq!(orphan.fill_color.red, FALLBACK_GROUP_COLOR.red);
    assert_eq!(orphan.fill_color.green, FALLBACK_GROUP_COLOR.green);
    assert_eq!(orphan.fill_color.blue, FALLBACK_GROUP_COLOR.blue);
}

#[test]
fn out_of_range_position_is_clamped_into_the_plot() {
    let mut data = ChartData::sample();
    data.bubbles.push(Bubble {
        id: "outlier".to_owned(),
        name: "Outlier".to_owned(),
        x: 9_999.0,
        y: -9_999.0,
        size: 10.0,
        group: "helpdesk".to_owned(),
    });

    let frame = build(&data);
    let outlier = frame
        .circles()
        .find(|circle| circle.bubble_id == "outlier")
        .expect("outlier circle present");

    let margins = Margins::default();
    assert_eq!(outlier.center_x, 800.0 - margins.right);
    assert_eq!(outlier.center_y, 600.0 - margins.bottom);
}

#[test]
fn bubble_label_sits_fixed_offset_below_circle() {
    let data = ChartData::sample();
    let frame = build(&data);

    let first = frame.circles().next().expect("a circle").clone();
    let label = frame
        .primitives
        .iter()
        .find_map(|primitive| match primitive {
            ScenePrimitive::BubbleLabel(text) if text.text == "Grant App Access" => Some(text),
            _ => None,
        })
        .expect("matching label");

    assert!((label.y - (first.center_y + first.radius + 15.0)).abs() <= 1e-9);
}

#[test]
fn legend_has_one_swatch_and_label_per_group() {
    let data = ChartData::sample();
    let frame = build(&data);

    let swatches = frame
        .primitives
        .iter()
        .filter(|primitive| matches!(primitive, ScenePrimitive::LegendSwatch(_)))
        .count();
    let labels = frame
        .primitives
        .iter()
        .filter(|primitive| matches!(primitive, ScenePrimitive::LegendLabel(_)))
        .count();

    assert_eq!(swatches, data.groups.len());
    assert_eq!(labels, data.groups.len());
}

#[test]
fn unparseable_css_color_falls_back_instead_of_failing() {
    let mut data = ChartData::sample();
    data.groups[0].color = "not-a-color".to_owned();

    let frame = build(&data);
    frame.validate().expect("frame still valid");

    let circle = frame
        .circles()
        .find(|circle| circle.group_label == "Helpdesk")
        .expect("helpdesk circle");
    assert_eq!(circle.fill_color.red, FALLBACK_GROUP_COLOR.red);
}

#[test]
fn degenerate_axis_domain_fails_scene_construction() {
    let mut data = ChartData::sample();
    data.x_axis.min = 10.0;
    data.x_axis.max = 10.0;

    let result = SceneBuilder::build(&data, viewport(), Margins::default());
    assert!(result.is_err());
}

#[test]
fn css_color_parsing_covers_hex_and_rgba() {
    let hex = Color::parse_css("#38bdf8").expect("hex color");
    assert!((hex.red - 56.0 / 255.0).abs() <= 1e-9);
    assert_eq!(hex.alpha, 1.0);

    let rgba = Color::parse_css("rgba(99, 102, 241, 0.08)").expect("rgba color");
    assert!((rgba.alpha - 0.08).abs() <= 1e-9);

    let short = Color::parse_css("#666").expect("short hex");
    assert!((short.red - 102.0 / 255.0).abs() <= 1e-9);

    assert!(Color::parse_css("rebeccapurple").is_none());
}
