//! Records host callbacks in the order they fire.

use std::cell::RefCell;
use std::rc::Rc;

use swipecard_ui::SwipeCallbacks;
use swipecard_ui_graphics::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackEvent {
    Swiped(Direction),
    LeftScreen,
    LeftSideClick,
    RightSideClick,
}

#[derive(Clone, Default)]
pub struct CallbackLog {
    events: Rc<RefCell<Vec<CallbackEvent>>>,
}

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks that append to this log.
    pub fn callbacks(&self) -> SwipeCallbacks {
        let swiped = Rc::clone(&self.events);
        let left_screen = Rc::clone(&self.events);
        let left_click = Rc::clone(&self.events);
        let right_click = Rc::clone(&self.events);
        SwipeCallbacks::new()
            .on_swipe(move |direction| swiped.borrow_mut().push(CallbackEvent::Swiped(direction)))
            .on_card_left_screen(move || left_screen.borrow_mut().push(CallbackEvent::LeftScreen))
            .on_left_side_click(move || left_click.borrow_mut().push(CallbackEvent::LeftSideClick))
            .on_right_side_click(move || {
                right_click
                    .borrow_mut()
                    .push(CallbackEvent::RightSideClick)
            })
    }

    pub fn events(&self) -> Vec<CallbackEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: CallbackEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
