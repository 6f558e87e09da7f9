use swipecard_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Touch,
    Mouse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Pointer left the card while pressed; released like `Up`.
    Cancel,
}

/// Normalized pointer event, identical for touch and mouse input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub source: PointerSource,
    /// Viewport-relative position (client coordinates).
    pub position: Point,
    /// Monotonic capture time in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, source: PointerSource, position: Point, time_ms: u64) -> Self {
        Self {
            kind,
            source,
            position,
            time_ms,
        }
    }

    pub fn is_release(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// Raw input as a host receives it from its platform.
///
/// Touch events carry the first target touch; mouse events the cursor.
/// `TouchEnd`, `MouseUp` and `MouseLeave` carry the last known position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    TouchStart { position: Point, time_ms: u64 },
    TouchMove { position: Point, time_ms: u64 },
    TouchEnd { position: Point, time_ms: u64 },
    MouseDown { position: Point, time_ms: u64 },
    MouseMove { position: Point, time_ms: u64 },
    MouseUp { position: Point, time_ms: u64 },
    MouseLeave { position: Point, time_ms: u64 },
}

impl PointerInput {
    pub fn source(&self) -> PointerSource {
        match self {
            PointerInput::TouchStart { .. }
            | PointerInput::TouchMove { .. }
            | PointerInput::TouchEnd { .. } => PointerSource::Touch,
            PointerInput::MouseDown { .. }
            | PointerInput::MouseMove { .. }
            | PointerInput::MouseUp { .. }
            | PointerInput::MouseLeave { .. } => PointerSource::Mouse,
        }
    }

    pub fn position(&self) -> Point {
        match *self {
            PointerInput::TouchStart { position, .. }
            | PointerInput::TouchMove { position, .. }
            | PointerInput::TouchEnd { position, .. }
            | PointerInput::MouseDown { position, .. }
            | PointerInput::MouseMove { position, .. }
            | PointerInput::MouseUp { position, .. }
            | PointerInput::MouseLeave { position, .. } => position,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match *self {
            PointerInput::TouchStart { time_ms, .. }
            | PointerInput::TouchMove { time_ms, .. }
            | PointerInput::TouchEnd { time_ms, .. }
            | PointerInput::MouseDown { time_ms, .. }
            | PointerInput::MouseMove { time_ms, .. }
            | PointerInput::MouseUp { time_ms, .. }
            | PointerInput::MouseLeave { time_ms, .. } => time_ms,
        }
    }
}
