//! In-memory card surface that records every command it receives.

use std::cell::RefCell;
use std::rc::Rc;

use swipecard_animation::{TransformTween, TransitionSpec};
use swipecard_core::Timeline;
use swipecard_ui::CardSurface;
use swipecard_ui_graphics::{CardTransform, Size, TransformMatrix};

/// One call made on a [`RecordingSurface`], stamped with timeline time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceCommand {
    Transform { at_ms: u64, matrix: TransformMatrix },
    Transition { at_ms: u64, spec: TransitionSpec },
    Visible { at_ms: u64, visible: bool },
}

impl SurfaceCommand {
    pub fn at_ms(&self) -> u64 {
        match *self {
            SurfaceCommand::Transform { at_ms, .. }
            | SurfaceCommand::Transition { at_ms, .. }
            | SurfaceCommand::Visible { at_ms, .. } => at_ms,
        }
    }
}

struct RecordingState {
    size: Option<Size>,
    matrix: TransformMatrix,
    transition: TransitionSpec,
    visible: bool,
    tween: Option<TransformTween>,
    commands: Vec<SurfaceCommand>,
    timeline: Option<Timeline>,
}

impl RecordingState {
    fn now(&self) -> u64 {
        self.timeline.as_ref().map_or(0, Timeline::now_millis)
    }
}

/// A [`CardSurface`] for tests.
///
/// Clones share state, so a test keeps one handle while the card owns
/// another. The surface also interpolates transitions the way a browser
/// would, see [`RecordingSurface::presented_at`].
#[derive(Clone)]
pub struct RecordingSurface {
    state: Rc<RefCell<RecordingState>>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            state: Rc::new(RefCell::new(RecordingState {
                size: Some(size),
                matrix: TransformMatrix::IDENTITY,
                transition: TransitionSpec::INSTANT,
                visible: true,
                tween: None,
                commands: Vec::new(),
                timeline: None,
            })),
        }
    }

    /// Stamps commands with `timeline` time instead of zero.
    pub fn with_timeline(self, timeline: &Timeline) -> Self {
        self.state.borrow_mut().timeline = Some(timeline.clone());
        self
    }

    /// Simulates the element being removed from the render tree.
    pub fn detach(&self) {
        self.state.borrow_mut().size = None;
    }

    pub fn attach(&self, size: Size) {
        self.state.borrow_mut().size = Some(size);
    }

    pub fn commands(&self) -> Vec<SurfaceCommand> {
        self.state.borrow().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.state.borrow_mut().commands.clear();
    }

    /// Every transform written so far, decoded.
    pub fn transforms(&self) -> Vec<CardTransform> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Transform { matrix, .. } => Some(CardTransform::from_matrix(matrix)),
                _ => None,
            })
            .collect()
    }

    pub fn transitions(&self) -> Vec<TransitionSpec> {
        self.state
            .borrow()
            .commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Transition { spec, .. } => Some(*spec),
                _ => None,
            })
            .collect()
    }

    /// Target transform, ignoring any transition in flight.
    pub fn current_transform(&self) -> CardTransform {
        CardTransform::from_matrix(&self.state.borrow().matrix)
    }

    pub fn current_matrix(&self) -> TransformMatrix {
        self.state.borrow().matrix
    }

    pub fn current_transition(&self) -> TransitionSpec {
        self.state.borrow().transition
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    /// Pose on screen at `now_ms`, following the last transition.
    pub fn presented_at(&self, now_ms: u64) -> CardTransform {
        let state = self.state.borrow();
        match state.tween {
            Some(tween) => tween.value_at(now_ms),
            None => CardTransform::from_matrix(&state.matrix),
        }
    }
}

impl CardSurface for RecordingSurface {
    fn size(&self) -> Option<Size> {
        self.state.borrow().size
    }

    fn transform(&self) -> Option<TransformMatrix> {
        let state = self.state.borrow();
        state.size.map(|_| state.matrix)
    }

    fn set_transform(&mut self, matrix: TransformMatrix) {
        let mut state = self.state.borrow_mut();
        let at_ms = state.now();
        let from = state
            .tween
            .map_or_else(|| CardTransform::from_matrix(&state.matrix), |t| t.value_at(at_ms));
        state.tween = Some(TransformTween::new(
            from,
            CardTransform::from_matrix(&matrix),
            state.transition,
            at_ms,
        ));
        state.matrix = matrix;
        state.commands.push(SurfaceCommand::Transform { at_ms, matrix });
    }

    fn set_transition(&mut self, transition: TransitionSpec) {
        let mut state = self.state.borrow_mut();
        let at_ms = state.now();
        state.transition = transition;
        state.commands.push(SurfaceCommand::Transition {
            at_ms,
            spec: transition,
        });
    }

    fn set_visible(&mut self, visible: bool) {
        let mut state = self.state.borrow_mut();
        let at_ms = state.now();
        state.visible = visible;
        state.commands.push(SurfaceCommand::Visible { at_ms, visible });
    }
}
