pub mod drag;

pub use drag::{DragSession, DragUpdate, GestureSignal, GestureState, GestureTracker, ReleaseInfo};
