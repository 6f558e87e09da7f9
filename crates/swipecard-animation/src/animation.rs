//! Transition timing for card surfaces.
//!
//! A [`TransitionSpec`] is what a surface is told to use when its transform
//! changes next: CSS-backed hosts turn it into a `transition` declaration,
//! retained-mode hosts feed it to a [`TransformTween`].

use std::fmt;

use swipecard_ui_graphics::{CardTransform, Point};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(self.x.lerp(&target.x, fraction), self.y.lerp(&target.y, fraction))
    }
}

impl Lerp for CardTransform {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        CardTransform::new(
            self.translation.lerp(&target.translation, fraction),
            self.rotation_degrees
                .lerp(&target.rotation_degrees, fraction),
        )
    }
}

/// Easing curves, named after their CSS timing-function keywords.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// CSS `linear`.
    Linear,
    /// CSS `ease`, the default timing function.
    Ease,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Arbitrary `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, fraction),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }

    pub fn css_name(&self) -> String {
        match *self {
            Easing::Linear => "linear".into(),
            Easing::Ease => "ease".into(),
            Easing::EaseIn => "ease-in".into(),
            Easing::EaseOut => "ease-out".into(),
            Easing::EaseInOut => "ease-in-out".into(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction, clamped
    // to [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Duration and easing applied to the next transform change of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// Duration in milliseconds. Fractional values are kept so that exit
    /// flights computed from velocity are not rounded.
    pub duration_millis: f32,
    pub easing: Easing,
}

impl TransitionSpec {
    /// No transition: the surface jumps to each new transform, used while the
    /// card follows the pointer.
    pub const INSTANT: TransitionSpec = TransitionSpec {
        duration_millis: 0.0,
        easing: Easing::Linear,
    };

    pub fn tween(duration_millis: f32, easing: Easing) -> Self {
        Self {
            duration_millis: duration_millis.max(0.0),
            easing,
        }
    }

    /// A transition using the CSS default `ease` curve.
    pub fn ease(duration_millis: f32) -> Self {
        Self::tween(duration_millis, Easing::Ease)
    }

    pub fn is_instant(&self) -> bool {
        self.duration_millis <= 0.0
    }

    /// Eased progress `[0, 1]` after `elapsed_millis`.
    pub fn progress(&self, elapsed_millis: f32) -> f32 {
        if self.is_instant() {
            return 1.0;
        }
        let linear = (elapsed_millis / self.duration_millis).clamp(0.0, 1.0);
        self.easing.transform(linear)
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::INSTANT
    }
}

impl fmt::Display for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_instant() {
            f.write_str("none")
        } else {
            write!(f, "{}ms {}", self.duration_millis, self.easing.css_name())
        }
    }
}

/// Interpolates a card transform from `from` to `to` following a transition.
///
/// This is the retained-mode counterpart of a CSS transition: sample it each
/// frame with the current time to get the pose to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformTween {
    pub from: CardTransform,
    pub to: CardTransform,
    pub spec: TransitionSpec,
    pub start_millis: u64,
}

impl TransformTween {
    pub fn new(
        from: CardTransform,
        to: CardTransform,
        spec: TransitionSpec,
        start_millis: u64,
    ) -> Self {
        Self {
            from,
            to,
            spec,
            start_millis,
        }
    }

    pub fn value_at(&self, now_millis: u64) -> CardTransform {
        let elapsed = now_millis.saturating_sub(self.start_millis) as f32;
        self.from.lerp(&self.to, self.spec.progress(elapsed))
    }

    pub fn is_finished(&self, now_millis: u64) -> bool {
        now_millis.saturating_sub(self.start_millis) as f32 >= self.spec.duration_millis
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
