//! Velocity and direction math for card drags.

use crate::gesture_constants::TILT_VELOCITY_SCALE;
use swipecard_ui_graphics::{Direction, TimedPoint, Velocity};

/// Euclidean norm of `(x, y)`.
pub fn distance(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}

/// Velocity (px/s) between two timestamped samples, y axis pointing up.
///
/// Samples with the same timestamp, or out of order, yield zero velocity so a
/// duplicate event never produces `NaN` or an infinite speed.
pub fn velocity_between(prev: TimedPoint, next: TimedPoint) -> Velocity {
    if next.time_ms <= prev.time_ms {
        log::trace!(
            "degenerate velocity sample: dt={}ms, treating as stationary",
            next.time_ms as i128 - prev.time_ms as i128
        );
        return Velocity::ZERO;
    }
    let dt_ms = (next.time_ms - prev.time_ms) as f32;
    let velocity = Velocity::new(
        (next.x - prev.x) * 1000.0 / dt_ms,
        (prev.y - next.y) * 1000.0 / dt_ms,
    );
    if velocity.x.is_finite() && velocity.y.is_finite() {
        velocity
    } else {
        Velocity::ZERO
    }
}

/// Direction of the dominant axis. Horizontal wins ties.
pub fn classify_direction(velocity: Velocity) -> Direction {
    if velocity.x.abs() >= velocity.y.abs() {
        if velocity.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if velocity.y > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Card tilt in degrees for an instantaneous drag velocity, proportional to
/// horizontal speed and clamped to `±limit_degrees`.
pub fn tilt_from_velocity(velocity: Velocity, max_tilt_degrees: f32, limit_degrees: f32) -> f32 {
    let tilt = velocity.x / TILT_VELOCITY_SCALE * max_tilt_degrees;
    if !tilt.is_finite() {
        return 0.0;
    }
    let limit = limit_degrees.abs();
    tilt.clamp(-limit, limit)
}
