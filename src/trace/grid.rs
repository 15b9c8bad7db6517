use ndarray::Array2;

use super::util::{Direction, Position};
use crate::errors::GridError;

/// Square table of letters the words are traced through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    /// Letters stored row-major, always `size x size`
    state: Array2<char>,
}

impl LetterGrid {
    /// Builds the grid from its rows. Every row must be as long as there are rows
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut letters = Vec::with_capacity(size * size);
        for (row, chars) in rows.iter().enumerate() {
            let chars = chars.as_ref();
            if chars.len() != size {
                return Err(GridError::RaggedRow {
                    row,
                    len: chars.len(),
                    size,
                });
            }
            letters.extend_from_slice(chars);
        }
        let len = letters.len();
        let state =
            Array2::from_shape_vec((size, size), letters).map_err(|_| GridError::NotSquare { len })?;
        Ok(Self { state })
    }

    /// Builds the grid from a string of N^2 letters read row by row
    pub fn from_flat(matrix: &str) -> Result<Self, GridError> {
        let letters: Vec<char> = matrix.chars().collect();
        let len = letters.len();
        if len == 0 {
            return Err(GridError::Empty);
        }
        let size = (len as f64).sqrt().round() as usize;
        if size * size != len {
            return Err(GridError::NotSquare { len });
        }
        let rows: Vec<&[char]> = letters.chunks(size).collect();
        Self::from_rows(&rows)
    }

    /// Side length N of the grid
    pub fn size(&self) -> usize {
        self.state.nrows()
    }

    /// Letter stored at the given position
    pub fn letter_at(&self, pos: Position) -> Result<char, GridError> {
        self.state
            .get((pos.row, pos.col))
            .copied()
            .ok_or(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size(),
            })
    }

    /// Two cells are adjacent when they share an edge. Diagonals and the cell itself are not
    pub fn is_adjacent(a: Position, b: Position) -> bool {
        a.distance(&b) == 1
    }

    /// In-bounds neighbours of a cell: right, left, down, up
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        Direction::iter()
            .filter_map(|d| pos.step(*d, self.size()))
            .collect()
    }

    /// Iterates over the rows of letters, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<char>> + '_ {
        self.state.rows().into_iter().map(|r| r.to_vec())
    }

    /// Iterates over every position in row-major order together with its letter
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.state
            .indexed_iter()
            .map(|((row, col), &letter)| (Position { row, col }, letter))
    }
}

impl std::ops::Index<Position> for LetterGrid {
    type Output = char;

    fn index(&self, index: Position) -> &Self::Output {
        &self.state[(index.row, index.col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> LetterGrid {
        LetterGrid::from_flat("ABCDEFGHI").unwrap()
    }

    #[test]
    fn test_from_flat() {
        let grid = abc();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid[Position::new(0, 0)], 'A');
        assert_eq!(grid[Position::new(1, 2)], 'F');
        assert_eq!(grid[Position::new(2, 1)], 'H');

        assert_eq!(
            LetterGrid::from_flat("ABCDE"),
            Err(GridError::NotSquare { len: 5 })
        );
        assert_eq!(LetterGrid::from_flat(""), Err(GridError::Empty));
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![vec!['A', 'B'], vec!['C', 'D']];
        let grid = LetterGrid::from_rows(&rows).unwrap();
        assert_eq!(grid, LetterGrid::from_flat("ABCD").unwrap());

        let ragged = vec![vec!['A', 'B'], vec!['C']];
        assert_eq!(
            LetterGrid::from_rows(&ragged),
            Err(GridError::RaggedRow { row: 1, len: 1, size: 2 })
        );
    }

    #[test]
    fn test_letter_at_bounds() {
        let grid = abc();
        assert_eq!(grid.letter_at(Position::new(2, 2)), Ok('I'));
        assert_eq!(
            grid.letter_at(Position::new(3, 0)),
            Err(GridError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        assert_eq!(
            grid.letter_at(Position::new(0, 7)),
            Err(GridError::OutOfBounds { row: 0, col: 7, size: 3 })
        );
    }

    #[test]
    fn test_adjacency() {
        let a = Position::new(1, 1);
        assert!(LetterGrid::is_adjacent(a, Position::new(0, 1)));
        assert!(LetterGrid::is_adjacent(a, Position::new(1, 2)));
        assert!(!LetterGrid::is_adjacent(a, a));
        assert!(!LetterGrid::is_adjacent(a, Position::new(2, 2)));
        assert!(!LetterGrid::is_adjacent(a, Position::new(1, 3)));
    }

    #[test]
    fn test_neighbors_order() {
        let grid = abc();
        assert_eq!(
            grid.neighbors(Position::new(1, 1)),
            vec![
                Position::new(1, 2),
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(0, 1),
            ]
        );
        // Corners drop the out of bounds steps but keep the order
        assert_eq!(
            grid.neighbors(Position::new(0, 0)),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
        assert_eq!(
            grid.neighbors(Position::new(2, 2)),
            vec![Position::new(2, 1), Position::new(1, 2)]
        );
    }

    #[test]
    fn test_cells_row_major() {
        let grid = LetterGrid::from_flat("ABCD").unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Position::new(0, 0), 'A'),
                (Position::new(0, 1), 'B'),
                (Position::new(1, 0), 'C'),
                (Position::new(1, 1), 'D'),
            ]
        );
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![vec!['A', 'B'], vec!['C', 'D']]);
    }
}
