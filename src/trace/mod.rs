use log::debug;
use rayon::prelude::*;

use self::expander::PathExpander;
use self::finder::find_start_points;
use self::reducer::reduce_paths;
use crate::errors::GridError;

pub mod expander;
pub mod finder;
pub mod grid;
pub mod path;
pub mod reducer;
pub mod util;

pub use self::grid::LetterGrid;
pub use self::path::TracePath;
pub use self::util::{CaseSensitivity, Position};

/// Caller supplied knobs for a single search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// How word letters are compared against grid letters
    pub case: CaseSensitivity,
    /// Expand start cells on the rayon pool. Output order is unaffected
    pub parallel: bool,
}

/// Finds every distinct path spelling `word` through `grid`.
///
/// An empty result means the word does not occur. A path and its reverse are reported once,
/// in the order they were first discovered (start cells row-major, then neighbours right,
/// left, down, up).
pub fn search(
    grid: &LetterGrid,
    word: &[char],
    options: &SearchOptions,
) -> Result<Vec<TracePath>, GridError> {
    let first = match word.first() {
        Some(&c) => c,
        None => return Ok(vec![]),
    };

    let starts = find_start_points(grid, first, options.case);
    debug!("{} start points for '{}'", starts.len(), first);

    let expander = PathExpander::new(word, grid, options.case);
    let per_start: Vec<Vec<TracePath>> = if options.parallel {
        starts
            .par_iter()
            .map(|&start| expander.expand_from(start))
            .collect::<Result<_, _>>()?
    } else {
        starts
            .iter()
            .map(|&start| expander.expand_from(start))
            .collect::<Result<_, _>>()?
    };

    let raw: Vec<TracePath> = per_start.into_iter().flatten().collect();
    let raw_count = raw.len();
    let paths = reduce_paths(raw, word.len());
    debug!("{} raw paths reduced to {}", raw_count, paths.len());
    Ok(paths)
}
