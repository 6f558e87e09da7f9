//! Animation primitives for swipecard
//!
//! Easing curves, transition specs, and transform tweens. Timing itself is
//! driven by `swipecard_core::Timeline`.

mod animation;

pub use animation::*;
