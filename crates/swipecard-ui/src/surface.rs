//! Transform reader/writer over a host-provided card surface.
//!
//! A [`CardSurface`] is whatever the host draws the card with: a DOM element
//! styled through CSS transforms, a retained-mode layer, a native view. The
//! engine only ever talks to it through the helpers in this module, which turn
//! every operation on a detached surface into a no-op.

use swipecard_animation::TransitionSpec;
use swipecard_ui_graphics::{CardTransform, Point, Size, TransformMatrix};

pub trait CardSurface {
    /// Rendered size of the card, `None` once the surface is detached.
    fn size(&self) -> Option<Size>;

    /// Transform currently applied, `None` once the surface is detached.
    fn transform(&self) -> Option<TransformMatrix>;

    fn set_transform(&mut self, matrix: TransformMatrix);

    /// Timing for subsequent transform changes.
    fn set_transition(&mut self, transition: TransitionSpec);

    fn set_visible(&mut self, visible: bool);

    fn is_attached(&self) -> bool {
        self.size().is_some()
    }
}

pub fn element_size<S: CardSurface + ?Sized>(surface: &S) -> Option<Size> {
    surface.size()
}

/// Reads translation and rotation back from the surface's affine transform.
pub fn read_transform<S: CardSurface + ?Sized>(surface: &S) -> Option<CardTransform> {
    surface
        .transform()
        .map(|matrix| CardTransform::from_matrix(&matrix))
}

/// Applies `translate(translation) rotate(rotation_degrees)`.
///
/// Returns `false` without touching the surface if it is detached.
pub fn write_transform<S: CardSurface + ?Sized>(
    surface: &mut S,
    translation: Point,
    rotation_degrees: f32,
) -> bool {
    if !surface.is_attached() {
        log::debug!("skipping transform write on detached card surface");
        return false;
    }
    surface.set_transform(CardTransform::new(translation, rotation_degrees).to_matrix());
    true
}

pub fn set_transition<S: CardSurface + ?Sized>(surface: &mut S, transition: TransitionSpec) -> bool {
    if !surface.is_attached() {
        return false;
    }
    surface.set_transition(transition);
    true
}

pub fn set_visibility<S: CardSurface + ?Sized>(surface: &mut S, visible: bool) -> bool {
    if !surface.is_attached() {
        return false;
    }
    surface.set_visible(visible);
    true
}
