use log::trace;

use super::grid::LetterGrid;
use super::path::TracePath;
use super::util::{CaseSensitivity, Position};
use crate::errors::GridError;

/*
    Backtracking search that grows a path one letter at a time. Every fork hands each
    branch its own copy of the prefix and every call returns the complete paths it found,
    so no state is shared between branches or between start cells.
*/

#[derive(Debug, Clone, Copy)]
pub struct PathExpander<'a> {
    /// The word being traced
    pub word: &'a [char],
    /// The grid we are tracing the word through
    pub grid: &'a LetterGrid,
    /// How letters of the word are compared against the grid
    pub case: CaseSensitivity,
}

impl<'a> PathExpander<'a> {
    pub fn new(word: &'a [char], grid: &'a LetterGrid, case: CaseSensitivity) -> Self {
        Self { word, grid, case }
    }

    /// All complete paths spelling the word that begin at `start`
    pub fn expand_from(&self, start: Position) -> Result<Vec<TracePath>, GridError> {
        // Surface a bad start cell before any recursion happens
        self.grid.letter_at(start)?;
        self.expand(0, TracePath::start(start))
    }

    /// Extends `path`, whose last cell matches `word[word_index]`, into every complete path.
    /// Dead ends contribute nothing
    pub fn expand(&self, word_index: usize, path: TracePath) -> Result<Vec<TracePath>, GridError> {
        if word_index + 1 >= self.word.len() {
            return Ok(vec![path]);
        }

        let candidates = match path.last() {
            Some(last) => self.continuations(&path, last, self.word[word_index + 1])?,
            None => return Ok(vec![]),
        };

        if candidates.is_empty() {
            trace!("dead end at letter {} after {}", word_index, path);
            return Ok(vec![]);
        }
        if candidates.len() > 1 {
            trace!("{} branches after {}", candidates.len(), path);
        }

        let mut results = Vec::new();
        for next in candidates {
            debug_assert!(path.last().map_or(false, |last| LetterGrid::is_adjacent(last, next)));
            results.extend(self.expand(word_index + 1, path.extended(next))?);
        }
        Ok(results)
    }

    /// Neighbours of `last` holding `next` that the path has not visited yet, in neighbour order
    fn continuations(
        &self,
        path: &TracePath,
        last: Position,
        next: char,
    ) -> Result<Vec<Position>, GridError> {
        let mut found = Vec::new();
        for pos in self.grid.neighbors(last) {
            if self.case.matches(self.grid.letter_at(pos)?, next) && !path.contains(&pos) {
                found.push(pos);
            }
        }
        Ok(found)
    }
}
