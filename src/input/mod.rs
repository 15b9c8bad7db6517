use log::warn;

use crate::errors::CliError;
use crate::trace::{CaseSensitivity, LetterGrid};

pub const MATRIX: &str = "Matrix";
pub const WORD: &str = "Word";

/// Source of answers when an argument was not given on the command line
pub trait Ask {
    /// Asks the question and returns the answer, `None` if nothing could be read
    fn ask(&mut self, question: &str) -> Option<String>;
    /// Reports a rejected answer before the question is asked again
    fn complain(&mut self, err: &CliError);
}

/// Interactive prompt on stdin/stderr
pub struct StdinAsk;

impl Ask for StdinAsk {
    fn ask(&mut self, question: &str) -> Option<String> {
        eprintln!(" {}", question);
        eprint!(" > ");
        let answer: Result<String, _> = try_read!("{}\n");
        answer.ok().map(|a| a.trim().to_string())
    }

    fn complain(&mut self, err: &CliError) {
        eprintln!(" [ERROR] {}", err);
    }
}

/// Validated grid and word ready to be searched
#[derive(Debug, Clone)]
pub struct SearchInput {
    pub grid: LetterGrid,
    /// The word after case normalization, as it will be displayed
    pub word: String,
}

impl SearchInput {
    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }
}

/// Resolves both arguments, asking for the missing ones and again for the invalid ones
pub fn resolve(
    matrix: Option<String>,
    word: Option<String>,
    case: CaseSensitivity,
    asker: &mut impl Ask,
) -> Result<SearchInput, CliError> {
    let grid = resolve_one(
        matrix,
        MATRIX,
        &format!("Enter the \"{}\" to proceed:", MATRIX),
        asker,
        |raw| parse_matrix(raw, case),
    )?;
    let word = resolve_one(
        word,
        WORD,
        &format!("Enter the resulting \"{}\":", WORD),
        asker,
        |raw| parse_word(raw, grid.size(), case),
    )?;
    Ok(SearchInput { grid, word })
}

fn resolve_one<T>(
    mut given: Option<String>,
    field: &'static str,
    question: &str,
    asker: &mut impl Ask,
    parse: impl Fn(&str) -> Result<T, CliError>,
) -> Result<T, CliError> {
    loop {
        let raw = match given.take().filter(|s| !s.is_empty()) {
            Some(raw) => raw,
            None => asker.ask(question).unwrap_or_default(),
        };
        if raw.is_empty() {
            return Err(CliError::Undefined(field));
        }
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() => {
                warn!("rejected {}: {}", field, err);
                asker.complain(&err);
            }
            Err(err) => return Err(err),
        }
    }
}

/// Checks that the matrix is made of letters only and describes a square
pub fn parse_matrix(raw: &str, case: CaseSensitivity) -> Result<LetterGrid, CliError> {
    if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CliError::NotAlphabetic(MATRIX));
    }
    let len = raw.chars().count();
    let size = (len as f64).sqrt().round() as usize;
    if size * size != len {
        return Err(CliError::WrongCharCount { len });
    }
    Ok(LetterGrid::from_flat(&case.normalize(raw))?)
}

/// Checks that the word is made of letters only and is as long as the grid is wide
pub fn parse_word(raw: &str, size: usize, case: CaseSensitivity) -> Result<String, CliError> {
    if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CliError::NotAlphabetic(WORD));
    }
    let actual = raw.chars().count();
    if actual != size {
        return Err(CliError::WrongWordLength {
            expected: size,
            actual,
        });
    }
    Ok(case.normalize(raw))
}
