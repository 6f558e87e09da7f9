use swipecard_ui_graphics::Direction;

type DirectionCallback = Box<dyn FnMut(Direction)>;
type Callback = Box<dyn FnMut()>;

/// Host notifications. Every callback is optional; missing ones are skipped.
#[derive(Default)]
pub struct SwipeCallbacks {
    on_swipe: Option<DirectionCallback>,
    on_card_left_screen: Option<Callback>,
    on_left_side_click: Option<Callback>,
    on_right_side_click: Option<Callback>,
}

impl SwipeCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once a swipe is recognized, before any animation runs.
    pub fn on_swipe(mut self, callback: impl FnMut(Direction) + 'static) -> Self {
        self.on_swipe = Some(Box::new(callback));
        self
    }

    /// Called after the exit animation finishes and the card is hidden.
    pub fn on_card_left_screen(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_card_left_screen = Some(Box::new(callback));
        self
    }

    pub fn on_left_side_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_left_side_click = Some(Box::new(callback));
        self
    }

    pub fn on_right_side_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_right_side_click = Some(Box::new(callback));
        self
    }

    pub(crate) fn swiped(&mut self, direction: Direction) {
        if let Some(callback) = self.on_swipe.as_mut() {
            callback(direction);
        }
    }

    pub(crate) fn left_screen(&mut self) {
        if let Some(callback) = self.on_card_left_screen.as_mut() {
            callback();
        }
    }

    pub(crate) fn left_side_click(&mut self) {
        if let Some(callback) = self.on_left_side_click.as_mut() {
            callback();
        }
    }

    pub(crate) fn right_side_click(&mut self) {
        if let Some(callback) = self.on_right_side_click.as_mut() {
            callback();
        }
    }
}
