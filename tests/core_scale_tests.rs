use approx::assert_abs_diff_eq;
use quadchart::core::{
    Bubble, LinearScale, MAX_BUBBLE_RADIUS_PX, MIN_BUBBLE_RADIUS_PX, SizeScale,
};

fn bubble_with_size(id: &str, size: f64) -> Bubble {
    Bubble {
        id: id.to_owned(),
        name: format!("bubble {id}"),
        x: 1.0,
        y: 1.0,
        size,
        group: "g".to_owned(),
    }
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new("x", 10.0, 110.0, 0.0, 700.0).expect("valid scale");

    let original = 42.5;
    let px = scale.to_pixel(original);
    let recovered = scale.to_domain(px);

    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_is_rejected() {
    let result = LinearScale::new("x", 5.0, 5.0, 0.0, 700.0);
    assert!(result.is_err());
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new("x", f64::NAN, 10.0, 0.0, 700.0).is_err());
    assert!(LinearScale::new("y", 0.0, f64::INFINITY, 0.0, 700.0).is_err());
}

#[test]
fn inverted_pixel_range_maps_domain_upward() {
    // Vertical axis form: pixel range runs bottom to top.
    let scale = LinearScale::new("y", 0.0, 25.0, 500.0, 0.0).expect("valid scale");

    assert_eq!(scale.to_pixel(0.0), 500.0);
    assert_eq!(scale.to_pixel(25.0), 0.0);
    assert!(scale.to_pixel(20.0) < scale.to_pixel(5.0));
}

#[test]
fn domain_mid_is_halfway() {
    let scale = LinearScale::new("x", 10.0, 30.0, 0.0, 100.0).expect("valid scale");
    assert_eq!(scale.domain_mid(), 20.0);
}

#[test]
fn clamp_bounds_to_domain() {
    let scale = LinearScale::new("x", 0.0, 25.0, 0.0, 100.0).expect("valid scale");
    assert_eq!(scale.clamp(-3.0), 0.0);
    assert_eq!(scale.clamp(30.0), 25.0);
    assert_eq!(scale.clamp(12.0), 12.0);
}

#[test]
fn size_scale_maps_max_size_to_max_radius() {
    let bubbles = vec![
        bubble_with_size("1", 10.0),
        bubble_with_size("2", 20.0),
        bubble_with_size("3", 100.0),
    ];
    let scale = SizeScale::from_bubbles(&bubbles);

    assert_eq!(scale.max_size(), 100.0);
    assert_eq!(scale.radius_for(100.0), MAX_BUBBLE_RADIUS_PX);
    assert_eq!(scale.radius_for(0.0), MIN_BUBBLE_RADIUS_PX);
}

#[test]
fn size_scale_renormalizes_when_max_shrinks() {
    let with_large = vec![
        bubble_with_size("1", 10.0),
        bubble_with_size("2", 20.0),
        bubble_with_size("3", 100.0),
    ];
    let without_large = vec![bubble_with_size("1", 10.0), bubble_with_size("2", 20.0)];

    let radius_before = SizeScale::from_bubbles(&with_large).radius_for(20.0);
    let after = SizeScale::from_bubbles(&without_large);
    let radius_after = after.radius_for(20.0);

    assert!(radius_after > radius_before);
    assert_eq!(radius_after, MAX_BUBBLE_RADIUS_PX);
}

#[test]
fn size_scale_defaults_to_100_for_empty_set() {
    let scale = SizeScale::from_bubbles(&[]);
    assert_eq!(scale.max_size(), 100.0);
    assert_eq!(scale.radius_for(100.0), MAX_BUBBLE_RADIUS_PX);
}

#[test]
fn size_scale_defaults_when_all_sizes_non_positive() {
    let bubbles = vec![bubble_with_size("1", 0.0), bubble_with_size("2", -5.0)];
    let scale = SizeScale::from_bubbles(&bubbles);
    assert_eq!(scale.max_size(), 100.0);
}

#[test]
fn size_scale_floors_degenerate_sizes() {
    let bubbles = vec![bubble_with_size("1", 50.0)];
    let scale = SizeScale::from_bubbles(&bubbles);

    assert_eq!(scale.radius_for(-10.0), MIN_BUBBLE_RADIUS_PX);
    assert_eq!(scale.radius_for(f64::NAN), MIN_BUBBLE_RADIUS_PX);
    assert!(scale.radius_for(1.0) >= MIN_BUBBLE_RADIUS_PX);
}
