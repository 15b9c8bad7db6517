use serde::{Deserialize, Serialize};

use crate::trace::{LetterGrid, TracePath};

pub mod json;
pub mod text;

/// How text output is dressed
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Wrap headers and traced letters in ANSI styles
    pub color: bool,
    /// Only print the traces, no grid tables
    pub brief: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            brief: false,
        }
    }
}

/// Everything a consumer needs to show where a word was traced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub word: String,
    pub size: usize,
    pub grid: Vec<Vec<char>>,
    pub paths: Vec<TracePath>,
}

impl Report {
    pub fn new(word: &str, grid: &LetterGrid, paths: Vec<TracePath>) -> Self {
        Self {
            word: word.to_string(),
            size: grid.size(),
            grid: grid.rows().collect(),
            paths,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.paths.is_empty()
    }
}
