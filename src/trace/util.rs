use std::fmt;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

/// The four orthogonal steps a trace can take between two letters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Directions in the order neighbours are visited. Result ordering depends on it
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 4] = [
            Direction::Right,
            Direction::Left,
            Direction::Down,
            Direction::Up,
        ];
        DIRS.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the next position in the given direction, if it stays inside a grid of `size`
    pub fn step(&self, dir: Direction, size: usize) -> Option<Position> {
        let pos = match dir {
            Direction::Right => Position::new(self.row, self.col.checked_add(1)?),
            Direction::Left => Position::new(self.row, self.col.checked_sub(1)?),
            Direction::Down => Position::new(self.row.checked_add(1)?, self.col),
            Direction::Up => Position::new(self.row.checked_sub(1)?, self.col),
        };
        if pos.row < size && pos.col < size {
            Some(pos)
        } else {
            None
        }
    }

    /// Manhattan distance between two positions
    pub fn distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// How two letters are compared while tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    Sensitive,
    #[default]
    Insensitive,
}

impl CaseSensitivity {
    pub fn matches(&self, a: char, b: char) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a == b || a.to_lowercase().eq(b.to_lowercase()),
        }
    }

    /// Upper-cases raw input unless letters are compared exactly
    pub fn normalize(&self, input: &str) -> String {
        match self {
            Self::Sensitive => input.to_string(),
            Self::Insensitive => input.to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3), None);
        assert_eq!(corner.step(Direction::Left, 3), None);
        assert_eq!(corner.step(Direction::Right, 3), Some(Position::new(0, 1)));
        assert_eq!(corner.step(Direction::Down, 3), Some(Position::new(1, 0)));

        let far = Position::new(2, 2);
        assert_eq!(far.step(Direction::Right, 3), None);
        assert_eq!(far.step(Direction::Down, 3), None);
    }

    #[test]
    fn test_direction_order() {
        let origin = Position::new(1, 1);
        let steps: Vec<_> = Direction::iter()
            .filter_map(|d| origin.step(*d, 3))
            .collect();
        assert_eq!(
            steps,
            vec![
                Position::new(1, 2),
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_case_policy() {
        assert!(CaseSensitivity::Insensitive.matches('a', 'A'));
        assert!(!CaseSensitivity::Sensitive.matches('a', 'A'));
        assert!(CaseSensitivity::Sensitive.matches('Q', 'Q'));
        assert_eq!(CaseSensitivity::Insensitive.normalize("abC"), "ABC");
        assert_eq!(CaseSensitivity::Sensitive.normalize("abC"), "abC");
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 1).to_string(), "(3,1)");
    }
}
