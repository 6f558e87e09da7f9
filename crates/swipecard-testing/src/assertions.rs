//! Assertion helpers for card poses.

use swipecard_ui_graphics::{CardTransform, Point};

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

pub fn assert_transform_approx_eq(
    actual: CardTransform,
    expected: CardTransform,
    tolerance: f32,
    msg: &str,
) {
    assert_point_approx_eq(
        actual.translation,
        expected.translation,
        tolerance,
        &format!("{} - translation", msg),
    );
    assert_approx_eq(
        actual.rotation_degrees,
        expected.rotation_degrees,
        tolerance,
        &format!("{} - rotation", msg),
    );
}

/// Assert that the card is at rest: no translation and no tilt.
pub fn assert_at_rest(actual: CardTransform, msg: &str) {
    assert_transform_approx_eq(actual, CardTransform::IDENTITY, 1e-3, msg);
}
