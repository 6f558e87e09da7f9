//! Swipeable cards built on the swipecard runtime.
//!
//! A [`SwipeCard`] turns pointer input into drag transforms on a
//! [`CardSurface`], classifies the release, and either flies the card off
//! screen or bounces it back.

mod animator;
mod callbacks;
mod card;
mod classifier;
mod config;
mod surface;

pub use animator::{animate_back, animate_out, plan_exit, plan_snap_back, ExitPlan, SnapBackPlan};
pub use callbacks::SwipeCallbacks;
pub use card::SwipeCard;
pub use classifier::{classify_release, is_swipe, Motion, ReleaseDecision, SwipeOutcome};
pub use config::{ConfigError, SwipeConfig};
pub use surface::{
    element_size, read_transform, set_transition, set_visibility, write_transform, CardSurface,
};

pub use swipecard_animation::{Easing, TransitionSpec};
pub use swipecard_core::Timeline;
pub use swipecard_foundation::{GestureSignal, GestureState, PointerInput};
pub use swipecard_ui_graphics::{
    CardTransform, Direction, DirectionSet, Point, Size, TransformMatrix, Velocity,
};

pub mod prelude {
    pub use crate::{
        CardSurface, Direction, Point, Size, SwipeCallbacks, SwipeCard, SwipeConfig, SwipeOutcome,
        Timeline,
    };
}
