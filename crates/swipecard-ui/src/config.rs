//! Card configuration.

use std::fmt;

use swipecard_foundation::gesture_constants::{
    BOUNCE_POWER, MAX_TILT_DEGREES, SNAP_BACK_DURATION_MS, SWIPE_THRESHOLD, TILT_LIMIT_DEGREES,
};
use swipecard_ui_graphics::{Direction, DirectionSet};

/// Immutable per-card settings, fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    pub snap_back_duration_ms: f32,
    /// Tilt per 1000 px/s of horizontal drag speed.
    pub max_tilt_degrees: f32,
    /// Absolute cap on tilt during a drag.
    pub tilt_limit_degrees: f32,
    pub bounce_power: f32,
    /// px/s on either axis.
    pub swipe_threshold: f32,
    /// Whether a recognized swipe flies the card off screen. When `false`
    /// swipes are still reported but the card snaps back.
    pub flick_on_swipe: bool,
    /// Directions that are reported but never flown out.
    pub prevent_swipe: DirectionSet,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            snap_back_duration_ms: SNAP_BACK_DURATION_MS,
            max_tilt_degrees: MAX_TILT_DEGREES,
            tilt_limit_degrees: TILT_LIMIT_DEGREES,
            bounce_power: BOUNCE_POWER,
            swipe_threshold: SWIPE_THRESHOLD,
            flick_on_swipe: true,
            prevent_swipe: DirectionSet::EMPTY,
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flick_on_swipe(mut self, flick_on_swipe: bool) -> Self {
        self.flick_on_swipe = flick_on_swipe;
        self
    }

    pub fn with_prevent_swipe(mut self, directions: DirectionSet) -> Self {
        self.prevent_swipe = directions;
        self
    }

    pub fn prevent(mut self, direction: Direction) -> Self {
        self.prevent_swipe.insert(direction);
        self
    }

    pub fn with_swipe_threshold(mut self, px_per_second: f32) -> Self {
        self.swipe_threshold = px_per_second;
        self
    }

    pub fn with_snap_back_duration(mut self, millis: f32) -> Self {
        self.snap_back_duration_ms = millis;
        self
    }

    pub fn with_bounce_power(mut self, bounce_power: f32) -> Self {
        self.bounce_power = bounce_power;
        self
    }

    pub fn with_tilt(mut self, max_tilt_degrees: f32, tilt_limit_degrees: f32) -> Self {
        self.max_tilt_degrees = max_tilt_degrees;
        self.tilt_limit_degrees = tilt_limit_degrees;
        self
    }

    pub fn allows_flick(&self, direction: Direction) -> bool {
        self.flick_on_swipe && !self.prevent_swipe.contains(direction)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("snap_back_duration_ms", self.snap_back_duration_ms),
            ("max_tilt_degrees", self.max_tilt_degrees),
            ("tilt_limit_degrees", self.tilt_limit_degrees),
            ("bounce_power", self.bounce_power),
            ("swipe_threshold", self.swipe_threshold),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotFinite { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite { field, value } => {
                write!(f, "swipe config field `{field}` must be finite, got {value}")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "swipe config field `{field}` must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
