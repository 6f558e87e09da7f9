//! Core runtime for swipecard
//!
//! A single-threaded timeline that hosts push forward from their event loop.
//! Timers and the `Sleep` future resume exactly once; local tasks let
//! animations be written as straight-line async code.

mod clock;
mod sleep;
mod timeline;

pub use clock::MonotonicClock;
pub use sleep::Sleep;
pub use timeline::{TaskHandle, TaskId, Timeline, TimerId, TimerRegistration};
