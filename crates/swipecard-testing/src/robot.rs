//! Robot-style driver for a single card.
//!
//! The robot owns the notion of "now": every gesture step advances the card's
//! timeline before the event is delivered, so velocities and animations see
//! consistent timestamps.
//!
//! ```ignore
//! let robot = CardRobot::mouse(&card);
//! robot.swipe((150.0, 200.0), (450.0, 200.0), 5, 100);
//! robot.settle();
//! ```

use swipecard_foundation::{GestureSignal, PointerInput, PointerSource};
use swipecard_ui::{CardSurface, ReleaseDecision, SwipeCard};
use swipecard_ui_graphics::Point;

/// Upper bound on timers fired by [`CardRobot::settle`].
const MAX_SETTLE_STEPS: usize = 1024;

pub struct CardRobot<'a, S: CardSurface + 'static> {
    card: &'a SwipeCard<S>,
    source: PointerSource,
}

impl<'a, S: CardSurface + 'static> CardRobot<'a, S> {
    pub fn mouse(card: &'a SwipeCard<S>) -> Self {
        Self {
            card,
            source: PointerSource::Mouse,
        }
    }

    pub fn touch(card: &'a SwipeCard<S>) -> Self {
        Self {
            card,
            source: PointerSource::Touch,
        }
    }

    pub fn now(&self) -> u64 {
        self.card.timeline().now_millis()
    }

    pub fn advance(&self, millis: u64) {
        self.card.timeline().advance_by(millis);
    }

    /// Fires pending timers until none are left.
    pub fn settle(&self) {
        let timeline = self.card.timeline();
        for _ in 0..MAX_SETTLE_STEPS {
            match timeline.next_due() {
                Some(due) => timeline.advance_to(due),
                None => return,
            }
        }
        panic!("card did not settle after {MAX_SETTLE_STEPS} timers");
    }

    pub fn press(&self, x: f32, y: f32) -> GestureSignal {
        let position = Point::new(x, y);
        let time_ms = self.now();
        self.card.handle_input(match self.source {
            PointerSource::Mouse => PointerInput::MouseDown { position, time_ms },
            PointerSource::Touch => PointerInput::TouchStart { position, time_ms },
        })
    }

    /// Waits `after_ms`, then moves the pointer.
    pub fn move_to(&self, x: f32, y: f32, after_ms: u64) -> GestureSignal {
        self.advance(after_ms);
        let position = Point::new(x, y);
        let time_ms = self.now();
        self.card.handle_input(match self.source {
            PointerSource::Mouse => PointerInput::MouseMove { position, time_ms },
            PointerSource::Touch => PointerInput::TouchMove { position, time_ms },
        })
    }

    pub fn release_at(&self, x: f32, y: f32) -> GestureSignal {
        let position = Point::new(x, y);
        let time_ms = self.now();
        self.card.handle_input(match self.source {
            PointerSource::Mouse => PointerInput::MouseUp { position, time_ms },
            PointerSource::Touch => PointerInput::TouchEnd { position, time_ms },
        })
    }

    /// Mouse leaving the card; ends a mouse drag like a release.
    pub fn leave(&self, x: f32, y: f32) -> GestureSignal {
        let position = Point::new(x, y);
        let time_ms = self.now();
        self.card
            .handle_input(PointerInput::MouseLeave { position, time_ms })
    }

    /// Presses at `from`, moves to `to` in `steps` equal moves spread over
    /// `duration_ms`, and releases there. Returns the release decision.
    pub fn swipe(
        &self,
        from: (f32, f32),
        to: (f32, f32),
        steps: u32,
        duration_ms: u64,
    ) -> Option<ReleaseDecision> {
        let steps = steps.max(1);
        let step_ms = (duration_ms / u64::from(steps)).max(1);
        self.press(from.0, from.1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(
                from.0 + (to.0 - from.0) * fraction,
                from.1 + (to.1 - from.1) * fraction,
                step_ms,
            );
        }
        let signal = self.release_at(to.0, to.1);
        self.decision_for(signal)
    }

    /// Press and release without moving.
    pub fn click(&self, x: f32, y: f32) -> Option<ReleaseDecision> {
        self.press(x, y);
        let signal = self.release_at(x, y);
        self.decision_for(signal)
    }

    fn decision_for(&self, signal: GestureSignal) -> Option<ReleaseDecision> {
        match signal {
            GestureSignal::Released(_) => self.card.last_decision(),
            _ => None,
        }
    }
}
