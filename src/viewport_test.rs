#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn displayed(left: f64, top: f64, size: f64) -> Viewport {
    Viewport { left, top, width: size, height: size, surface_width: 800.0, surface_height: 800.0 }
}

// --- Point ---

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn point_angle_to_right_is_zero() {
    assert!(approx_eq(Point::new(400.0, 400.0).angle_to_deg(Point::new(500.0, 400.0)), 0.0));
}

#[test]
fn point_angle_downward_is_ninety() {
    // Surface y grows downward.
    assert!(approx_eq(Point::new(0.0, 0.0).angle_to_deg(Point::new(0.0, 10.0)), 90.0));
}

// --- client_to_surface ---

#[test]
fn identity_maps_unchanged() {
    let vp = Viewport::identity(800.0, 800.0);
    assert!(point_approx_eq(vp.client_to_surface(Point::new(123.0, 456.0)), Point::new(123.0, 456.0)));
}

#[test]
fn offset_rect_subtracts_origin() {
    let vp = displayed(100.0, 50.0, 800.0);
    assert!(point_approx_eq(vp.client_to_surface(Point::new(100.0, 50.0)), Point::new(0.0, 0.0)));
}

#[test]
fn half_size_display_doubles_coordinates() {
    let vp = displayed(10.0, 20.0, 400.0);
    let p = vp.client_to_surface(Point::new(210.0, 220.0));
    assert!(point_approx_eq(p, Point::new(400.0, 400.0)));
}

#[test]
fn double_size_display_halves_coordinates() {
    let vp = displayed(0.0, 0.0, 1600.0);
    let p = vp.client_to_surface(Point::new(800.0, 400.0));
    assert!(point_approx_eq(p, Point::new(400.0, 200.0)));
}

#[test]
fn non_uniform_display_scales_axes_independently() {
    let vp = Viewport { left: 0.0, top: 0.0, width: 400.0, height: 800.0, surface_width: 800.0, surface_height: 800.0 };
    assert_eq!(vp.scale_factors(), (2.0, 1.0));
    assert!(point_approx_eq(vp.client_to_surface(Point::new(100.0, 100.0)), Point::new(200.0, 100.0)));
}

#[test]
fn collapsed_rect_maps_one_to_one() {
    let vp = Viewport { left: 5.0, top: 5.0, width: 0.0, height: 0.0, surface_width: 800.0, surface_height: 800.0 };
    assert_eq!(vp.scale_factors(), (1.0, 1.0));
    assert!(point_approx_eq(vp.client_to_surface(Point::new(15.0, 25.0)), Point::new(10.0, 20.0)));
}

// --- round trip ---

#[test]
fn surface_to_client_inverts_mapping() {
    for size in [400.0, 800.0, 1600.0] {
        let vp = displayed(33.0, 17.0, size);
        let surface = Point::new(250.0, 610.0);
        let back = vp.client_to_surface(vp.surface_to_client(surface));
        assert!(point_approx_eq(back, surface));
    }
}

// --- normalize ---

#[test]
fn normalize_divides_by_surface_size() {
    let vp = Viewport::identity(800.0, 800.0);
    assert!(point_approx_eq(vp.normalize(Point::new(400.0, 64.0)), Point::new(0.5, 0.08)));
    assert!(point_approx_eq(vp.normalize(Point::new(-80.0, 736.0)), Point::new(-0.1, 0.92)));
}

// --- SurfaceSize ---

#[test]
fn surface_size_to_pixels() {
    let size = SurfaceSize::square(800.0);
    let p = size.to_pixels(LayerPosition { x: 0.5, y: 0.25 });
    assert!(point_approx_eq(p, Point::new(400.0, 200.0)));
    assert_eq!(displayed(0.0, 0.0, 400.0).surface(), size);
}
