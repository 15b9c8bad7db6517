use super::grid::LetterGrid;
use super::util::{CaseSensitivity, Position};

/// Every cell holding `first`, scanned row by row then column by column.
/// An empty result is a valid answer meaning the word cannot start anywhere
pub fn find_start_points(grid: &LetterGrid, first: char, case: CaseSensitivity) -> Vec<Position> {
    grid.cells()
        .filter(|&(_, letter)| case.matches(letter, first))
        .map(|(pos, _)| pos)
        .collect()
}
