#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_sub_is_component_wise() {
    let d = Point::new(450.0, 310.0) - Point::new(400.0, 300.0);
    assert_eq!(d, Point::new(50.0, 10.0));
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- screen_to_world ---

#[test]
fn screen_to_world_identity() {
    let cam = Camera::default();
    let world = cam.screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 4.0 };
    let world = cam.screen_to_world(Point::new(40.0, 80.0));
    assert!(point_approx_eq(world, Point::new(10.0, 20.0)));
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 50.0, pan_y: 30.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(0.0, 0.0));
    assert!(point_approx_eq(world, Point::new(-25.0, -15.0)));
}

// --- world_to_screen ---

#[test]
fn world_to_screen_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 3.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    // 5*3 + 20 = 35, 5*3 + 10 = 25
    assert!(point_approx_eq(screen, Point::new(35.0, 25.0)));
}

// --- Round trips ---

#[test]
fn round_trip_over_many_cameras() {
    let cameras = [
        Camera::default(),
        Camera { pan_x: 50.0, pan_y: -30.0, zoom: 2.0 },
        Camera { pan_x: 13.7, pan_y: -42.3, zoom: 0.75 },
        Camera { pan_x: -1000.0, pan_y: 250.5, zoom: 1.1_f64.powi(17) },
    ];
    let points = [Point::new(0.0, 0.0), Point::new(400.0, 300.0), Point::new(-12.5, 9999.0)];
    for cam in cameras {
        for p in points {
            let back = cam.screen_to_world(cam.world_to_screen(p));
            assert!(point_approx_eq(p, back), "{cam:?} {p:?} -> {back:?}");
            let back = cam.world_to_screen(cam.screen_to_world(p));
            assert!(point_approx_eq(p, back), "{cam:?} {p:?} -> {back:?}");
        }
    }
}

// --- pan ---

#[test]
fn pan_to_sets_absolute_offset() {
    let mut cam = Camera { pan_x: 5.0, pan_y: 5.0, zoom: 2.0 };
    cam.pan_to(Point::new(-40.0, 12.0));
    assert_eq!(cam.pan(), Point::new(-40.0, 12.0));
    assert_eq!(cam.zoom, 2.0);
}

#[test]
fn pan_by_accumulates() {
    let mut cam = Camera::default();
    cam.pan_by(10.0, -5.0);
    cam.pan_by(2.5, 2.5);
    assert_eq!(cam.pan(), Point::new(12.5, -2.5));
}

// --- zoom_at ---

#[test]
fn zoom_at_keeps_anchor_fixed() {
    let factors = [1.1, 1.0 / 1.1, 2.0, 0.5, 3.7];
    let anchors = [Point::new(0.0, 0.0), Point::new(450.0, 310.0), Point::new(-80.0, 1200.0)];
    for f in factors {
        for anchor in anchors {
            let mut cam = Camera { pan_x: 33.0, pan_y: -17.0, zoom: 1.3 };
            let before = cam.screen_to_world(anchor);
            assert!(cam.zoom_at(anchor, f));
            let after = cam.screen_to_world(anchor);
            assert!(point_approx_eq(before, after), "factor {f} anchor {anchor:?}");
        }
    }
}

#[test]
fn zoom_at_multiplies_zoom() {
    let mut cam = Camera::default();
    assert!(cam.zoom_at(Point::new(100.0, 100.0), 1.1));
    assert!(approx_eq(cam.zoom, 1.1));
    assert!(cam.zoom_at(Point::new(100.0, 100.0), 1.0 / 1.1));
    assert!(approx_eq(cam.zoom, 1.0));
}

#[test]
fn zoom_at_origin_anchor_leaves_pan_alone() {
    let mut cam = Camera::default();
    assert!(cam.zoom_at(Point::new(0.0, 0.0), 2.0));
    assert_eq!(cam.pan(), Point::new(0.0, 0.0));
}

#[test]
fn zoom_at_rejects_non_positive_factor() {
    let mut cam = Camera { pan_x: 1.0, pan_y: 2.0, zoom: 1.5 };
    for f in [0.0, -1.1, f64::NAN, f64::INFINITY] {
        assert!(!cam.zoom_at(Point::new(10.0, 10.0), f));
        assert_eq!(cam, Camera { pan_x: 1.0, pan_y: 2.0, zoom: 1.5 });
    }
}

#[test]
fn zoom_never_collapses_to_zero() {
    let mut cam = Camera::default();
    let anchor = Point::new(300.0, 200.0);
    for _ in 0..10_000 {
        cam.zoom_at(anchor, wheel_zoom_factor(1.0));
    }
    assert!(cam.zoom > 0.0);
    assert!(approx_eq(cam.zoom, crate::consts::MIN_ZOOM));
    let world = cam.screen_to_world(anchor);
    assert!(world.x.is_finite() && world.y.is_finite());
}

#[test]
fn zoom_clamped_anchor_still_fixed() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 90.0 };
    let anchor = Point::new(250.0, 125.0);
    let before = cam.screen_to_world(anchor);
    assert!(cam.zoom_at(anchor, 2.0));
    assert!(approx_eq(cam.zoom, crate::consts::MAX_ZOOM));
    assert!(point_approx_eq(before, cam.screen_to_world(anchor)));
}

// --- wheel_zoom_factor ---

#[test]
fn wheel_negative_delta_zooms_in() {
    assert!(approx_eq(wheel_zoom_factor(-3.0), 1.1));
}

#[test]
fn wheel_positive_or_zero_delta_zooms_out() {
    assert!(approx_eq(wheel_zoom_factor(3.0), 1.0 / 1.1));
    assert!(approx_eq(wheel_zoom_factor(0.0), 1.0 / 1.1));
}
