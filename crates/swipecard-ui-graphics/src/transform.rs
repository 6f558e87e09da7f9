//! 2D affine transforms for card surfaces.
//!
//! Field names follow the CSS/WebKit matrix convention so a host backed by a
//! `matrix(a, b, c, d, e, f)` style can map them one to one:
//!
//! ```text
//! | m11  m21  m41 |
//! | m12  m22  m42 |
//! |  0    0    1  |
//! ```

use crate::geometry::Point;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformMatrix {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub m41: f32,
    pub m42: f32,
}

impl TransformMatrix {
    pub const IDENTITY: TransformMatrix = TransformMatrix {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        m41: 0.0,
        m42: 0.0,
    };

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            m41: x,
            m42: y,
            ..Self::IDENTITY
        }
    }

    /// Clockwise rotation on screen (y grows downward), as CSS `rotate()`.
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            m11: cos,
            m12: sin,
            m21: -sin,
            m22: cos,
            m41: 0.0,
            m42: 0.0,
        }
    }

    /// Returns `self × other`: `other` is applied to points first.
    pub fn then(&self, other: &TransformMatrix) -> Self {
        Self {
            m11: self.m11 * other.m11 + self.m21 * other.m12,
            m12: self.m12 * other.m11 + self.m22 * other.m12,
            m21: self.m11 * other.m21 + self.m21 * other.m22,
            m22: self.m12 * other.m21 + self.m22 * other.m22,
            m41: self.m11 * other.m41 + self.m21 * other.m42 + self.m41,
            m42: self.m12 * other.m41 + self.m22 * other.m42 + self.m42,
        }
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.m11 * point.x + self.m21 * point.y + self.m41,
            self.m12 * point.x + self.m22 * point.y + self.m42,
        )
    }

    pub fn translation_part(&self) -> Point {
        Point::new(self.m41, self.m42)
    }

    /// Rotation recovered from the shear component, `-asin(m21)` in degrees.
    ///
    /// Only angles within ±90° survive the round trip.
    pub fn rotation_degrees(&self) -> f32 {
        -self.m21.clamp(-1.0, 1.0).asin() * 360.0 / (2.0 * std::f32::consts::PI)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A card pose: translation followed by a rotation around the card's own center.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CardTransform {
    pub translation: Point,
    pub rotation_degrees: f32,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        translation: Point::ZERO,
        rotation_degrees: 0.0,
    };

    pub const fn new(translation: Point, rotation_degrees: f32) -> Self {
        Self {
            translation,
            rotation_degrees,
        }
    }

    /// Composes `translate(x, y) rotate(deg)`; the order is never swapped.
    pub fn to_matrix(&self) -> TransformMatrix {
        TransformMatrix::translation(self.translation.x, self.translation.y)
            .then(&TransformMatrix::rotation(self.rotation_degrees))
    }

    pub fn from_matrix(matrix: &TransformMatrix) -> Self {
        Self {
            translation: matrix.translation_part(),
            rotation_degrees: matrix.rotation_degrees(),
        }
    }

    /// Scales translation and rotation together, e.g. for a bounce overshoot.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            translation: self.translation * factor,
            rotation_degrees: self.rotation_degrees * factor,
        }
    }
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) rotate({}deg)",
            self.translation.x, self.translation.y, self.rotation_degrees
        )
    }
}
