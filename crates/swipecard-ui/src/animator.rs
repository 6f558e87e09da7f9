//! Exit and snap-back animations.
//!
//! Both are planned as pure functions and then played against a surface as
//! local tasks on a [`Timeline`]. The surface runs the actual interpolation:
//! the animator only sets a transition and a target transform, then waits.

use std::cell::RefCell;
use std::rc::Rc;

use crate::surface::{read_transform, set_transition, set_visibility, write_transform, CardSurface};
use swipecard_animation::{Easing, TransitionSpec};
use swipecard_core::Timeline;
use swipecard_foundation::distance;
use swipecard_foundation::gesture_constants::{SETTLE_TRANSITION_MS, SNAP_BACK_RESET_FRACTION};
use swipecard_ui_graphics::{CardTransform, Size, Velocity};

/// Where the card flies to, and how long the flight takes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitPlan {
    pub target: CardTransform,
    pub duration_ms: f32,
    pub transition: TransitionSpec,
}

impl ExitPlan {
    /// Whole milliseconds to wait before the flight is considered done.
    pub fn wait_ms(&self) -> u64 {
        self.duration_ms.ceil() as u64
    }
}

/// Plans a flight that keeps the release velocity until the card has
/// travelled one viewport diagonal.
///
/// Duration is `diagonal / speed`, so faster flicks leave sooner. Rotation is
/// kept as it was at release. A zero or non-finite speed yields an immediate
/// exit in place.
pub fn plan_exit(start: CardTransform, velocity: Velocity, viewport: Size) -> ExitPlan {
    let diagonal = distance(viewport.width, viewport.height);
    let speed = distance(velocity.x, velocity.y);
    if speed <= 0.0 || !speed.is_finite() || !diagonal.is_finite() {
        log::warn!("exit planned with degenerate speed {speed}; leaving in place");
        return ExitPlan {
            target: start,
            duration_ms: 0.0,
            transition: TransitionSpec::INSTANT,
        };
    }

    let seconds = diagonal / speed;
    let duration_ms = seconds * 1000.0;
    ExitPlan {
        target: CardTransform::new(
            start.translation + velocity.screen_displacement(seconds),
            start.rotation_degrees,
        ),
        duration_ms,
        transition: TransitionSpec::tween(duration_ms, Easing::EaseOut),
    }
}

/// Bounce past the rest pose, return to it, then tighten the transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapBackPlan {
    pub overshoot: CardTransform,
    pub transition: TransitionSpec,
    /// Delay after which the transform returns to identity.
    pub reset_after_ms: u64,
    /// Delay, from the start, after which `settle_transition` applies.
    pub settle_after_ms: u64,
    pub settle_transition: TransitionSpec,
}

pub fn plan_snap_back(current: CardTransform, bounce_power: f32, duration_ms: f32) -> SnapBackPlan {
    let duration_ms = duration_ms.max(0.0);
    SnapBackPlan {
        overshoot: current.scaled(-bounce_power),
        transition: TransitionSpec::ease(duration_ms),
        reset_after_ms: (duration_ms * SNAP_BACK_RESET_FRACTION).round() as u64,
        settle_after_ms: duration_ms.round() as u64,
        settle_transition: TransitionSpec::ease(SETTLE_TRANSITION_MS),
    }
}

/// Flies the card off screen and hides it.
///
/// Returns `true` once the card is hidden, `false` if the surface was
/// detached before the flight could start or finish.
pub async fn animate_out<S: CardSurface>(
    surface: Rc<RefCell<S>>,
    timeline: Timeline,
    velocity: Velocity,
    viewport: Size,
) -> bool {
    let start = read_transform(&*surface.borrow());
    let Some(start) = start else {
        log::debug!("card surface detached before exit; skipping flight");
        return false;
    };

    let plan = plan_exit(start, velocity, viewport);
    log::debug!(
        "exit flight to {} over {:.1}ms",
        plan.target,
        plan.duration_ms
    );
    {
        let mut surface = surface.borrow_mut();
        set_transition(&mut *surface, plan.transition);
        write_transform(
            &mut *surface,
            plan.target.translation,
            plan.target.rotation_degrees,
        );
    }

    timeline.sleep(plan.wait_ms()).await;

    let hidden = set_visibility(&mut *surface.borrow_mut(), false);
    if !hidden {
        log::debug!("card surface detached during exit flight");
    }
    hidden
}

/// Bounces the card back to rest.
pub async fn animate_back<S: CardSurface>(
    surface: Rc<RefCell<S>>,
    timeline: Timeline,
    bounce_power: f32,
    duration_ms: f32,
) {
    let current = read_transform(&*surface.borrow()).unwrap_or(CardTransform::IDENTITY);
    let plan = plan_snap_back(current, bounce_power, duration_ms);
    {
        let mut surface = surface.borrow_mut();
        set_transition(&mut *surface, plan.transition);
        write_transform(
            &mut *surface,
            plan.overshoot.translation,
            plan.overshoot.rotation_degrees,
        );
    }

    timeline.sleep(plan.reset_after_ms).await;
    write_transform(
        &mut *surface.borrow_mut(),
        CardTransform::IDENTITY.translation,
        CardTransform::IDENTITY.rotation_degrees,
    );

    timeline
        .sleep(plan.settle_after_ms.saturating_sub(plan.reset_after_ms))
        .await;
    set_transition(&mut *surface.borrow_mut(), plan.settle_transition);
}
