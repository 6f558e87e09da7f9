//! A swipeable card: gesture tracking wired to a surface and host callbacks.
//!
//! Every card owns its tracker and release latch, so any number of cards can
//! share a [`Timeline`] and be dragged or animated in any interleaving.

use std::cell::RefCell;
use std::rc::Rc;

use crate::animator::{animate_back, animate_out};
use crate::callbacks::SwipeCallbacks;
use crate::classifier::{classify_release, Motion, ReleaseDecision, SwipeOutcome};
use crate::config::{ConfigError, SwipeConfig};
use crate::surface::{
    element_size, set_transition, set_visibility, write_transform, CardSurface,
};
use swipecard_animation::TransitionSpec;
use swipecard_core::{TaskHandle, Timeline};
use swipecard_foundation::{
    DragUpdate, GestureSignal, GestureState, GestureTracker, PointerEvent, PointerEventKind,
    PointerInput, PointerNormalizer, ReleaseInfo,
};
use swipecard_ui_graphics::{Point, Size, Velocity};

struct CardState {
    tracker: GestureTracker,
    normalizer: PointerNormalizer,
    viewport: Size,
    animation: Option<TaskHandle>,
    left_screen: bool,
    last_decision: Option<ReleaseDecision>,
}

pub struct SwipeCard<S: CardSurface + 'static> {
    surface: Rc<RefCell<S>>,
    state: Rc<RefCell<CardState>>,
    callbacks: Rc<RefCell<SwipeCallbacks>>,
    config: SwipeConfig,
    timeline: Timeline,
}

impl<S: CardSurface + 'static> SwipeCard<S> {
    /// Creates a card over `surface`. `viewport` is the screen area used for
    /// click zones and exit distance.
    pub fn new(
        surface: S,
        timeline: Timeline,
        viewport: Size,
        config: SwipeConfig,
        callbacks: SwipeCallbacks,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let tracker = GestureTracker::new(config.max_tilt_degrees, config.tilt_limit_degrees);
        Ok(Self {
            surface: Rc::new(RefCell::new(surface)),
            state: Rc::new(RefCell::new(CardState {
                tracker,
                normalizer: PointerNormalizer::default(),
                viewport,
                animation: None,
                left_screen: false,
                last_decision: None,
            })),
            callbacks: Rc::new(RefCell::new(callbacks)),
            config,
            timeline,
        })
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn state(&self) -> GestureState {
        self.state.borrow().tracker.state()
    }

    /// Whether a release animation is still running.
    pub fn is_animating(&self) -> bool {
        self.state.borrow().tracker.is_animating()
    }

    /// Whether the card has flown out and been hidden.
    pub fn has_left_screen(&self) -> bool {
        self.state.borrow().left_screen
    }

    /// Decision taken for the most recent release, cleared by `finalize`.
    pub fn last_decision(&self) -> Option<ReleaseDecision> {
        self.state.borrow().last_decision
    }

    pub fn last_outcome(&self) -> Option<SwipeOutcome> {
        self.last_decision().map(|decision| decision.outcome)
    }

    pub fn viewport(&self) -> Size {
        self.state.borrow().viewport
    }

    pub fn set_viewport(&self, viewport: Size) {
        self.state.borrow_mut().viewport = viewport;
    }

    pub fn element_size(&self) -> Option<Size> {
        element_size(&*self.surface.borrow())
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.surface.borrow())
    }

    pub fn with_surface_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.surface.borrow_mut())
    }

    /// Feeds a raw touch or mouse event.
    pub fn handle_input(&self, input: PointerInput) -> GestureSignal {
        let event = self.state.borrow_mut().normalizer.normalize(input);
        match event {
            Some(event) => self.handle_event(event),
            None => GestureSignal::Ignored,
        }
    }

    pub fn handle_event(&self, event: PointerEvent) -> GestureSignal {
        match event.kind {
            PointerEventKind::Down => {
                if self.press(event.position, event.time_ms) {
                    GestureSignal::Started
                } else {
                    GestureSignal::Ignored
                }
            }
            PointerEventKind::Move => self
                .move_to(event.position, event.time_ms)
                .map_or(GestureSignal::Ignored, GestureSignal::Dragged),
            PointerEventKind::Up | PointerEventKind::Cancel => self
                .release_with_info()
                .map_or(GestureSignal::Ignored, |(info, _)| {
                    GestureSignal::Released(info)
                }),
        }
    }

    /// Starts a drag at `point`. Refused while a release is animating or after
    /// the card left the screen.
    pub fn press(&self, point: Point, time_ms: u64) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.left_screen {
                log::debug!("press ignored: card already left the screen");
                return false;
            }
            if !state.tracker.on_press_start(point, time_ms) {
                return false;
            }
        }
        set_transition(&mut *self.surface.borrow_mut(), TransitionSpec::INSTANT);
        true
    }

    /// Follows the pointer; the card is translated and tilted immediately.
    pub fn move_to(&self, point: Point, time_ms: u64) -> Option<DragUpdate> {
        let update = self.state.borrow_mut().tracker.on_move(point, time_ms)?;
        write_transform(
            &mut *self.surface.borrow_mut(),
            update.translation,
            update.rotation_degrees,
        );
        Some(update)
    }

    /// Ends the drag and starts the matching animation. Only the first release
    /// of a press is acted on; later ones return `None`.
    pub fn release(&self) -> Option<ReleaseDecision> {
        self.release_with_info().map(|(_, decision)| decision)
    }

    fn release_with_info(&self) -> Option<(ReleaseInfo, ReleaseDecision)> {
        let (info, viewport) = {
            let mut state = self.state.borrow_mut();
            let info = state.tracker.on_release()?;
            (info, state.viewport)
        };

        let decision = classify_release(&self.config, info.velocity, info.offset, viewport.width);
        log::debug!(
            "release v=({:.1}, {:.1}) -> {:?} / {:?}",
            info.velocity.x,
            info.velocity.y,
            decision.outcome,
            decision.motion
        );
        self.state.borrow_mut().last_decision = Some(decision);

        if let SwipeOutcome::Swiped(direction) = decision.outcome {
            self.callbacks.borrow_mut().swiped(direction);
        }

        let task = match decision.motion {
            Motion::FlyOut => self.spawn_exit(info.velocity, viewport),
            Motion::SnapBack => self.spawn_snap_back(),
        };
        self.state.borrow_mut().animation = Some(task);

        match decision.outcome {
            SwipeOutcome::ClickLeft => self.callbacks.borrow_mut().left_side_click(),
            SwipeOutcome::ClickRight => self.callbacks.borrow_mut().right_side_click(),
            SwipeOutcome::Swiped(_) | SwipeOutcome::Cancelled => {}
        }

        Some((info, decision))
    }

    fn spawn_exit(&self, velocity: Velocity, viewport: Size) -> TaskHandle {
        let surface = Rc::clone(&self.surface);
        let state = Rc::clone(&self.state);
        let callbacks = Rc::clone(&self.callbacks);
        let timeline = self.timeline.clone();
        self.timeline.spawn_local(async move {
            let hidden = animate_out(surface, timeline, velocity, viewport).await;
            {
                let mut state = state.borrow_mut();
                state.tracker.finish();
                state.left_screen = hidden;
            }
            if hidden {
                callbacks.borrow_mut().left_screen();
            } else {
                log::debug!("card detached during exit; left-screen notification skipped");
            }
        })
    }

    fn spawn_snap_back(&self) -> TaskHandle {
        let surface = Rc::clone(&self.surface);
        let state = Rc::clone(&self.state);
        let timeline = self.timeline.clone();
        let bounce_power = self.config.bounce_power;
        let duration_ms = self.config.snap_back_duration_ms;
        self.timeline.spawn_local(async move {
            animate_back(surface, timeline, bounce_power, duration_ms).await;
            state.borrow_mut().tracker.finish();
        })
    }

    /// Cancels any running animation and puts the card back at rest, visible,
    /// ready for a new press.
    pub fn finalize(&self) {
        let animation = {
            let mut state = self.state.borrow_mut();
            state.tracker.reset();
            state.normalizer.reset();
            state.left_screen = false;
            state.last_decision = None;
            state.animation.take()
        };
        if let Some(task) = animation {
            task.cancel();
        }

        let mut surface = self.surface.borrow_mut();
        set_transition(&mut *surface, TransitionSpec::INSTANT);
        write_transform(&mut *surface, Point::ZERO, 0.0);
        set_visibility(&mut *surface, true);
    }
}

impl<S: CardSurface + 'static> Drop for SwipeCard<S> {
    fn drop(&mut self) {
        let animation = match self.state.try_borrow_mut() {
            Ok(mut state) => state.animation.take(),
            Err(_) => None,
        };
        if let Some(task) = animation {
            task.cancel();
        }
    }
}
