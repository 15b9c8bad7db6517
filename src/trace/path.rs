use std::fmt;

use serde::{Deserialize, Serialize};

use super::util::Position;

/// Ordered cells spelling a word, one cell per letter.
///
/// A path is an immutable value once built: extending it produces a new path so that
/// sibling branches of the search never observe each other's cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TracePath {
    cells: Vec<Position>,
}

impl TracePath {
    /// A path holding only its start cell
    pub fn start(pos: Position) -> Self {
        Self { cells: vec![pos] }
    }

    /// Returns a fresh copy of this path with `pos` appended
    pub fn extended(&self, pos: Position) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(pos);
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// The same cells walked from the other end
    pub fn reversed(&self) -> Self {
        Self {
            cells: self.cells.iter().rev().copied().collect(),
        }
    }
}

impl FromIterator<Position> for TracePath {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TracePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, pos) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", pos)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(usize, usize)]) -> TracePath {
        cells.iter().map(|&c| Position::from(c)).collect()
    }

    #[test]
    fn test_extended_leaves_prefix_untouched() {
        let base = TracePath::start(Position::new(0, 0));
        let right = base.extended(Position::new(0, 1));
        let down = base.extended(Position::new(1, 0));

        assert_eq!(base.cells(), &[Position::new(0, 0)]);
        assert_eq!(right, path(&[(0, 0), (0, 1)]));
        assert_eq!(down, path(&[(0, 0), (1, 0)]));
    }

    #[test]
    fn test_reverse() {
        let p = path(&[(0, 0), (0, 1), (1, 1)]);
        let r = p.reversed();
        assert_eq!(r, path(&[(1, 1), (0, 1), (0, 0)]));
        assert_eq!(r.reversed(), p);
        assert_eq!(TracePath::default().reversed(), TracePath::default());
    }

    #[test]
    fn test_display_and_json() {
        let p = path(&[(0, 0), (1, 0)]);
        assert_eq!(p.to_string(), "(0,0) (1,0)");
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"[{"row":0,"col":0},{"row":1,"col":0}]"#
        );
    }
}
