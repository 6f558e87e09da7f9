//! Shared gesture constants for swipeable cards.
//!
//! These are the defaults a card is configured with. All distances are in
//! logical pixels and all times in milliseconds.

/// Release speed (px/s) on either axis above which a release counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 300.0;

/// Duration of the snap-back bounce.
pub const SNAP_BACK_DURATION_MS: f32 = 300.0;

/// Fraction of the snap-back duration at which the card is reset to rest.
pub const SNAP_BACK_RESET_FRACTION: f32 = 0.75;

/// Transition re-armed once the snap-back settles, short enough to read as
/// instant but long enough to smooth the next drag's first frame.
pub const SETTLE_TRANSITION_MS: f32 = 10.0;

/// Overshoot factor for the snap-back: the card first moves to
/// `-BOUNCE_POWER × offset` before settling.
pub const BOUNCE_POWER: f32 = 0.2;

/// Tilt in degrees per [`TILT_VELOCITY_SCALE`] px/s of horizontal drag speed.
pub const MAX_TILT_DEGREES: f32 = 5.0;

/// Horizontal speed (px/s) that produces exactly [`MAX_TILT_DEGREES`] of tilt.
pub const TILT_VELOCITY_SCALE: f32 = 1000.0;

/// Hard limit on tilt magnitude regardless of drag speed.
pub const TILT_LIMIT_DEGREES: f32 = 30.0;
