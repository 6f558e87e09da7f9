//! Maps raw touch and mouse input onto [`PointerEvent`]s.
//!
//! Touch input is forwarded as-is. Mouse input is filtered by button state:
//! moves only count while the button is held, and leaving the card with the
//! button held releases the drag exactly like a button-up.

use super::types::{PointerEvent, PointerEventKind, PointerInput, PointerSource};

/// Per-card input filter. Each tracked card owns one.
#[derive(Clone, Debug, Default)]
pub struct PointerNormalizer {
    mouse_pressed: bool,
    touching: bool,
}

impl PointerNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Returns the normalized event, or `None` when the input is irrelevant
    /// to the drag (e.g. hovering with no button held).
    pub fn normalize(&mut self, input: PointerInput) -> Option<PointerEvent> {
        let kind = match input {
            PointerInput::TouchStart { .. } => {
                self.touching = true;
                PointerEventKind::Down
            }
            PointerInput::TouchMove { .. } => PointerEventKind::Move,
            PointerInput::TouchEnd { .. } => {
                self.touching = false;
                PointerEventKind::Up
            }
            PointerInput::MouseDown { .. } => {
                self.mouse_pressed = true;
                PointerEventKind::Down
            }
            PointerInput::MouseMove { .. } => {
                if !self.mouse_pressed {
                    return None;
                }
                PointerEventKind::Move
            }
            PointerInput::MouseUp { .. } => {
                if !self.mouse_pressed {
                    return None;
                }
                self.mouse_pressed = false;
                PointerEventKind::Up
            }
            PointerInput::MouseLeave { .. } => {
                if !self.mouse_pressed {
                    return None;
                }
                self.mouse_pressed = false;
                PointerEventKind::Cancel
            }
        };
        Some(PointerEvent::new(
            kind,
            input.source(),
            input.position(),
            input.time_ms(),
        ))
    }

    pub fn reset(&mut self) {
        self.mouse_pressed = false;
        self.touching = false;
    }

    pub fn is_active(&self, source: PointerSource) -> bool {
        match source {
            PointerSource::Touch => self.touching,
            PointerSource::Mouse => self.mouse_pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipecard_ui_graphics::Point;

    fn at(x: f32, time_ms: u64) -> (Point, u64) {
        (Point::new(x, 0.0), time_ms)
    }

    #[test]
    fn hover_without_button_is_dropped() {
        let mut normalizer = PointerNormalizer::new();
        let (position, time_ms) = at(10.0, 1);
        assert_eq!(
            normalizer.normalize(PointerInput::MouseMove { position, time_ms }),
            None
        );
        assert_eq!(
            normalizer.normalize(PointerInput::MouseUp { position, time_ms }),
            None
        );
        assert_eq!(
            normalizer.normalize(PointerInput::MouseLeave { position, time_ms }),
            None
        );
    }

    #[test]
    fn mouse_drag_maps_to_down_move_up() {
        let mut normalizer = PointerNormalizer::new();
        let (p0, t0) = at(0.0, 0);
        let (p1, t1) = at(5.0, 16);

        let down = normalizer
            .normalize(PointerInput::MouseDown { position: p0, time_ms: t0 })
            .map(|event| event.kind);
        let moved = normalizer.normalize(PointerInput::MouseMove { position: p1, time_ms: t1 });
        let up = normalizer
            .normalize(PointerInput::MouseUp { position: p1, time_ms: t1 })
            .map(|event| event.kind);

        assert_eq!(down, Some(PointerEventKind::Down));
        assert_eq!(
            moved,
            Some(PointerEvent::new(
                PointerEventKind::Move,
                PointerSource::Mouse,
                p1,
                t1
            ))
        );
        assert_eq!(up, Some(PointerEventKind::Up));
        assert!(!normalizer.is_mouse_pressed());
    }

    #[test]
    fn mouse_leave_while_pressed_cancels_once() {
        let mut normalizer = PointerNormalizer::new();
        let (position, time_ms) = at(0.0, 0);
        normalizer.normalize(PointerInput::MouseDown { position, time_ms });

        let leave = normalizer.normalize(PointerInput::MouseLeave { position, time_ms });
        assert_eq!(leave.map(|event| event.kind), Some(PointerEventKind::Cancel));
        assert!(leave.is_some_and(|event| event.is_release()));

        // The follow-up mouseup after leaving is not a second release.
        assert_eq!(
            normalizer.normalize(PointerInput::MouseUp { position, time_ms }),
            None
        );
    }

    #[test]
    fn touch_is_forwarded_unfiltered() {
        let mut normalizer = PointerNormalizer::new();
        let (position, time_ms) = at(3.0, 7);
        let moved = normalizer.normalize(PointerInput::TouchMove { position, time_ms });
        assert_eq!(moved.map(|event| event.source), Some(PointerSource::Touch));

        normalizer.normalize(PointerInput::TouchStart { position, time_ms });
        assert!(normalizer.is_active(PointerSource::Touch));
        normalizer.normalize(PointerInput::TouchEnd { position, time_ms });
        assert!(!normalizer.is_active(PointerSource::Touch));
    }
}
