//! Geometric primitives: Point, Size, TimedPoint, Velocity

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D offset or coordinate in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean length of the vector from the origin to this point.
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Length of the diagonal, `sqrt(w² + h²)`.
    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }
}

/// A position tagged with the monotonic time (milliseconds) it was captured at.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TimedPoint {
    pub x: f32,
    pub y: f32,
    pub time_ms: u64,
}

impl TimedPoint {
    pub const fn new(x: f32, y: f32, time_ms: u64) -> Self {
        Self { x, y, time_ms }
    }

    pub fn at(point: Point, time_ms: u64) -> Self {
        Self::new(point.x, point.y, time_ms)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Velocity in pixels per second.
///
/// Positive `x` points right and positive `y` points *up*: the vertical axis
/// is flipped relative to screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    /// Total speed regardless of direction.
    pub fn magnitude(&self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Displacement in screen coordinates after travelling for `seconds`.
    pub fn screen_displacement(&self, seconds: f32) -> Point {
        Point::new(self.x * seconds, -self.y * seconds)
    }
}

impl Mul<f32> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f32) -> Velocity {
        Velocity::new(self.x * rhs, self.y * rhs)
    }
}
