use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn unit_scale_metrics() {
    let m = TextMetrics::measure("HELLO", &LayerTransform::default());
    assert!(approx_eq(m.font_size, 60.0));
    assert!(approx_eq(m.width, 5.0 * 60.0 * 0.6));
    assert!(approx_eq(m.height, 72.0));
    assert!(approx_eq(m.half_width(), 90.0));
    assert!(approx_eq(m.half_height(), 36.0));
    assert!(approx_eq(m.handle_distance(), 57.6));
}

#[test]
fn scale_multiplies_everything() {
    let t = LayerTransform { scale: 2.0, rotation: 30.0 };
    let m = TextMetrics::measure("AB", &t);
    assert!(approx_eq(m.font_size, 120.0));
    assert!(approx_eq(m.width, 144.0));
    assert!(approx_eq(m.height, 144.0));
}

#[test]
fn rotation_does_not_change_box() {
    let a = TextMetrics::measure("ROT", &LayerTransform { scale: 1.0, rotation: 0.0 });
    let b = TextMetrics::measure("ROT", &LayerTransform { scale: 1.0, rotation: 77.0 });
    assert_eq!(a, b);
}

#[test]
fn width_counts_code_points_not_bytes() {
    let m = TextMetrics::measure("ää", &LayerTransform::default());
    assert!(approx_eq(m.width, 2.0 * 36.0));
}

#[test]
fn empty_text_has_zero_width_but_height() {
    let m = TextMetrics::measure("", &LayerTransform::default());
    assert!(approx_eq(m.width, 0.0));
    assert!(approx_eq(m.height, 72.0));
}
