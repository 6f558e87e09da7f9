//! Swipe directions and compact direction sets.

use std::fmt;
use std::str::FromStr;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the four directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown swipe direction '{}' (expected left, right, up or down)",
            self.input
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

/// Bit set of directions, e.g. the directions a card may not fly out towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: Self = Self(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn with(mut self, direction: Direction) -> Self {
        self.insert(direction);
        self
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << (direction as u8);
    }

    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !(1 << (direction as u8));
    }

    pub fn contains(&self, direction: Direction) -> bool {
        (self.0 & (1 << (direction as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, DirectionSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_display() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
        assert_eq!(" Up ".parse::<Direction>(), Ok(Direction::Up));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn set_membership() {
        let mut set: DirectionSet = [Direction::Up, Direction::Down].into_iter().collect();
        assert!(set.contains(Direction::Up));
        assert!(!set.contains(Direction::Left));
        set.remove(Direction::Up);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Direction::Down]);
        assert!(DirectionSet::new().is_empty());
    }
}
