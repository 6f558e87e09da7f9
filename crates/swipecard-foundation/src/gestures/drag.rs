//! Drag gesture tracker for a single card.
//!
//! State machine: `Idle → Pressed → Dragging → Released → Idle`.
//!
//! - A press records the inverse of the pointer position as the drag offset,
//!   so the card's origin stays pinned under the pointer.
//! - Every move produces a [`DragUpdate`] with the new translation and a tilt
//!   proportional to the instantaneous horizontal velocity.
//! - A release hands out the final velocity and offset exactly once per
//!   press. The one-shot latch lives in the session, so trackers for
//!   different cards never share it.
//! - While `Released` the card is animating and further presses are refused
//!   until [`GestureTracker::finish`] or [`GestureTracker::reset`].

use crate::gesture_constants::{MAX_TILT_DEGREES, TILT_LIMIT_DEGREES};
use crate::input::{PointerEvent, PointerEventKind};
use crate::velocity::{tilt_from_velocity, velocity_between};
use swipecard_ui_graphics::{CardTransform, Point, TimedPoint, Velocity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Pressed,
    Dragging,
    /// Released and animating; the session is kept until the animation ends.
    Released,
}

/// Ephemeral per-press drag state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Inverse of the press position.
    pub offset: Point,
    pub last_location: TimedPoint,
    pub velocity: Velocity,
    released: bool,
}

impl DragSession {
    fn begin(point: Point, time_ms: u64) -> Self {
        Self {
            offset: -point,
            // point + offset is the origin, so the first move measures
            // velocity from where the card rests at press time.
            last_location: TimedPoint::new(0.0, 0.0, time_ms),
            velocity: Velocity::ZERO,
            released: false,
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// Pose the card should take after a pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    pub translation: Point,
    pub rotation_degrees: f32,
    pub velocity: Velocity,
}

impl DragUpdate {
    pub fn transform(&self) -> CardTransform {
        CardTransform::new(self.translation, self.rotation_degrees)
    }
}

/// What a release hands to the outcome classifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseInfo {
    pub velocity: Velocity,
    pub offset: Point,
}

/// Result of feeding one normalized event to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSignal {
    Ignored,
    Started,
    Dragged(DragUpdate),
    Released(ReleaseInfo),
}

#[derive(Clone, Debug)]
pub struct GestureTracker {
    state: GestureState,
    session: Option<DragSession>,
    max_tilt_degrees: f32,
    tilt_limit_degrees: f32,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(MAX_TILT_DEGREES, TILT_LIMIT_DEGREES)
    }
}

impl GestureTracker {
    pub fn new(max_tilt_degrees: f32, tilt_limit_degrees: f32) -> Self {
        Self {
            state: GestureState::Idle,
            session: None,
            max_tilt_degrees,
            tilt_limit_degrees,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.state == GestureState::Released
    }

    pub fn handle(&mut self, event: &PointerEvent) -> GestureSignal {
        match event.kind {
            PointerEventKind::Down => {
                if self.on_press_start(event.position, event.time_ms) {
                    GestureSignal::Started
                } else {
                    GestureSignal::Ignored
                }
            }
            PointerEventKind::Move => self
                .on_move(event.position, event.time_ms)
                .map_or(GestureSignal::Ignored, GestureSignal::Dragged),
            PointerEventKind::Up | PointerEventKind::Cancel => self
                .on_release()
                .map_or(GestureSignal::Ignored, GestureSignal::Released),
        }
    }

    /// Starts a new session. Returns `false` if the previous release is still
    /// animating.
    pub fn on_press_start(&mut self, point: Point, time_ms: u64) -> bool {
        match self.state {
            GestureState::Released => {
                log::warn!("press at {point:?} refused: card is still animating its release");
                return false;
            }
            GestureState::Pressed | GestureState::Dragging => {
                log::debug!("press while already pressed; restarting drag session");
            }
            GestureState::Idle => {}
        }
        self.session = Some(DragSession::begin(point, time_ms));
        self.state = GestureState::Pressed;
        true
    }

    pub fn on_move(&mut self, point: Point, time_ms: u64) -> Option<DragUpdate> {
        if !matches!(self.state, GestureState::Pressed | GestureState::Dragging) {
            return None;
        }
        let session = self.session.as_mut()?;

        let translation = point + session.offset;
        let location = TimedPoint::at(translation, time_ms);
        let velocity = velocity_between(session.last_location, location);
        let rotation_degrees =
            tilt_from_velocity(velocity, self.max_tilt_degrees, self.tilt_limit_degrees);

        session.last_location = location;
        session.velocity = velocity;
        self.state = GestureState::Dragging;

        log::trace!("drag to {translation:?} v={velocity:?} tilt={rotation_degrees:.2}");
        Some(DragUpdate {
            translation,
            rotation_degrees,
            velocity,
        })
    }

    /// Consumes the session's release. Later calls return `None` until the
    /// next press.
    pub fn on_release(&mut self) -> Option<ReleaseInfo> {
        match self.state {
            GestureState::Idle => {
                log::trace!("release without press ignored");
                None
            }
            GestureState::Released => {
                log::trace!("duplicate release ignored");
                None
            }
            GestureState::Pressed | GestureState::Dragging => {
                let session = self.session.as_mut()?;
                if session.released {
                    return None;
                }
                session.released = true;
                self.state = GestureState::Released;
                Some(ReleaseInfo {
                    velocity: session.velocity,
                    offset: session.offset,
                })
            }
        }
    }

    /// Marks the release animation as complete and discards the session.
    pub fn finish(&mut self) {
        if self.state == GestureState::Released {
            self.session = None;
            self.state = GestureState::Idle;
        }
    }

    /// Drops any session regardless of state.
    pub fn reset(&mut self) {
        self.session = None;
        self.state = GestureState::Idle;
    }
}
