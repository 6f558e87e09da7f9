//! Testing utilities and robot harness for swipecard

pub mod assertions;
pub mod callback_log;
pub mod robot;
pub mod surface;

pub use assertions::*;
pub use callback_log::{CallbackEvent, CallbackLog};
pub use robot::CardRobot;
pub use surface::{RecordingSurface, SurfaceCommand};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::callback_log::{CallbackEvent, CallbackLog};
    pub use crate::robot::CardRobot;
    pub use crate::surface::{RecordingSurface, SurfaceCommand};
}
