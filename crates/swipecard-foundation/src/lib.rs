//! Pointer input, velocity math, and the drag gesture tracker for swipecard

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity;

pub use gestures::{
    DragSession, DragUpdate, GestureSignal, GestureState, GestureTracker, ReleaseInfo,
};
pub use input::{PointerEvent, PointerEventKind, PointerInput, PointerNormalizer, PointerSource};
pub use velocity::{classify_direction, distance, tilt_from_velocity, velocity_between};

pub mod prelude {
    pub use crate::gestures::{GestureSignal, GestureState, GestureTracker};
    pub use crate::input::prelude::*;
    pub use crate::velocity::{classify_direction, velocity_between};
}
