//! Release classification: swipe, click, or cancelled drag.

use crate::config::SwipeConfig;
use swipecard_foundation::classify_direction;
use swipecard_ui_graphics::{Direction, Point, Velocity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    Swiped(Direction),
    ClickLeft,
    ClickRight,
    Cancelled,
}

/// How the card moves after release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    FlyOut,
    SnapBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub outcome: SwipeOutcome,
    pub motion: Motion,
}

pub fn is_swipe(config: &SwipeConfig, velocity: Velocity) -> bool {
    velocity.x.abs() > config.swipe_threshold || velocity.y.abs() > config.swipe_threshold
}

/// Decides what a release means.
///
/// - Above threshold on either axis: a swipe in the dominant direction. It
///   flies out unless flicking is disabled or the direction is prevented.
/// - Exactly zero velocity: a click, on the left or right half of the
///   viewport depending on where the press landed (`-offset.x`).
/// - Anything else: a cancelled drag.
///
/// Every outcome except a flown-out swipe snaps back.
pub fn classify_release(
    config: &SwipeConfig,
    velocity: Velocity,
    offset: Point,
    viewport_width: f32,
) -> ReleaseDecision {
    if is_swipe(config, velocity) {
        let direction = classify_direction(velocity);
        let motion = if config.allows_flick(direction) {
            Motion::FlyOut
        } else {
            Motion::SnapBack
        };
        return ReleaseDecision {
            outcome: SwipeOutcome::Swiped(direction),
            motion,
        };
    }

    let outcome = if velocity.is_zero() {
        if -offset.x < viewport_width / 2.0 {
            SwipeOutcome::ClickLeft
        } else {
            SwipeOutcome::ClickRight
        }
    } else {
        SwipeOutcome::Cancelled
    };
    ReleaseDecision {
        outcome,
        motion: Motion::SnapBack,
    }
}
