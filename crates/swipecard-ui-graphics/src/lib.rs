//! Pure math/data for swipecard
//!
//! This crate contains geometry primitives, velocity and direction types,
//! and the affine transform used to pose a card on screen.

mod direction;
mod geometry;
mod transform;

pub use direction::*;
pub use geometry::*;
pub use transform::*;

pub mod prelude {
    pub use crate::direction::{Direction, DirectionSet};
    pub use crate::geometry::{Point, Size, TimedPoint, Velocity};
    pub use crate::transform::{CardTransform, TransformMatrix};
}
