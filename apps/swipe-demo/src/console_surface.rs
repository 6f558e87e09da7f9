use swipecard_ui::{CardSurface, CardTransform, Size, TransformMatrix, TransitionSpec};

/// Card surface that renders to the log instead of a screen.
pub struct ConsoleSurface {
    name: String,
    size: Option<Size>,
    matrix: TransformMatrix,
    transition: TransitionSpec,
    visible: bool,
}

impl ConsoleSurface {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
            matrix: TransformMatrix::IDENTITY,
            transition: TransitionSpec::INSTANT,
            visible: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pose(&self) -> CardTransform {
        CardTransform::from_matrix(&self.matrix)
    }
}

impl CardSurface for ConsoleSurface {
    fn size(&self) -> Option<Size> {
        self.size
    }

    fn transform(&self) -> Option<TransformMatrix> {
        self.size.map(|_| self.matrix)
    }

    fn set_transform(&mut self, matrix: TransformMatrix) {
        self.matrix = matrix;
        log::debug!(
            "[{}] transform: {} (transition: {})",
            self.name,
            CardTransform::from_matrix(&matrix),
            self.transition
        );
    }

    fn set_transition(&mut self, transition: TransitionSpec) {
        self.transition = transition;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        log::info!(
            "[{}] {}",
            self.name,
            if visible { "shown" } else { "hidden" }
        );
    }
}
