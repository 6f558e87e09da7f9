//! Gesture scripts given on the command line.

use anyhow::{anyhow, Result};
use swipecard_ui::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// A fast flick in a direction.
    Flick(Direction),
    /// A slow drag that should snap back.
    Nudge,
    TapLeft,
    TapRight,
    /// Restore the most recently swiped card.
    Undo,
}

pub const DEFAULT_SCRIPT: &[Gesture] = &[
    Gesture::Nudge,
    Gesture::Flick(Direction::Right),
    Gesture::TapLeft,
    Gesture::Flick(Direction::Up),
    Gesture::Undo,
    Gesture::Flick(Direction::Left),
    Gesture::TapRight,
    Gesture::Flick(Direction::Down),
];

pub fn parse_gesture(token: &str) -> Result<Gesture> {
    match token.trim().to_ascii_lowercase().as_str() {
        "nudge" => Ok(Gesture::Nudge),
        "tap-left" => Ok(Gesture::TapLeft),
        "tap-right" => Ok(Gesture::TapRight),
        "undo" => Ok(Gesture::Undo),
        other => other
            .parse::<Direction>()
            .map(Gesture::Flick)
            .map_err(|err| anyhow!("unknown gesture `{token}`: {err}")),
    }
}

/// Parses every argument as a gesture, or returns the default script when
/// there are none.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Vec<Gesture>> {
    let gestures = args
        .into_iter()
        .map(|arg| parse_gesture(&arg))
        .collect::<Result<Vec<_>>>()?;
    if gestures.is_empty() {
        Ok(DEFAULT_SCRIPT.to_vec())
    } else {
        Ok(gestures)
    }
}
