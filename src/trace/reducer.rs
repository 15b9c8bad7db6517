use super::path::TracePath;

/// Keeps complete paths only and collapses every path with its reverse, first one found wins
pub fn reduce_paths(raw: Vec<TracePath>, word_len: usize) -> Vec<TracePath> {
    let mut unique: Vec<TracePath> = Vec::with_capacity(raw.len());
    for path in raw.into_iter().filter(|p| p.len() == word_len) {
        if unique.contains(&path) || unique.contains(&path.reversed()) {
            continue;
        }
        unique.push(path);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::util::Position;

    fn path(cells: &[(usize, usize)]) -> TracePath {
        cells.iter().map(|&c| Position::from(c)).collect()
    }

    #[test]
    fn test_drops_partial_paths() {
        let raw = vec![path(&[(0, 0)]), path(&[(0, 0), (0, 1)]), path(&[(1, 1)])];
        assert_eq!(reduce_paths(raw, 2), vec![path(&[(0, 0), (0, 1)])]);
    }

    #[test]
    fn test_collapses_reverse_and_exact_duplicates() {
        let raw = vec![
            path(&[(0, 0), (0, 1)]),
            path(&[(1, 0), (1, 1)]),
            path(&[(0, 1), (0, 0)]),
            path(&[(0, 0), (0, 1)]),
            path(&[(1, 1), (1, 0)]),
        ];
        assert_eq!(
            reduce_paths(raw, 2),
            vec![path(&[(0, 0), (0, 1)]), path(&[(1, 0), (1, 1)])]
        );
    }

    #[test]
    fn test_same_cells_other_order_are_distinct() {
        // Not reverses of each other, only the same set of cells
        let raw = vec![
            path(&[(0, 0), (0, 1), (1, 1), (1, 0)]),
            path(&[(0, 1), (0, 0), (1, 0), (1, 1)]),
        ];
        assert_eq!(reduce_paths(raw.clone(), 4), raw);
    }

    #[test]
    fn test_empty() {
        assert!(reduce_paths(vec![], 3).is_empty());
    }
}
