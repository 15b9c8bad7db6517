use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, info};
#[macro_use]
extern crate text_io;

use crate::errors::CliError;
use crate::input::StdinAsk;
use crate::render::{json, text, RenderOptions, Report};
use crate::trace::{CaseSensitivity, SearchOptions};
use crate::utils::serialization;

mod errors;
mod input;
mod logging;
mod render;
mod trace;
mod utils;

/// Exit code when the word is not in the matrix
const NOT_FOUND: u8 = 2;

/// Trace a word through a square matrix of letters, moving up, down, left or right
#[derive(Parser, Debug)]
#[command(name = "word-trace", version, about, long_about = None)]
struct Cli {
    /// String of size N^2 that describes a square N*N matrix of letters, row by row
    matrix: Option<String>,

    /// The word to trace, N letters long
    word: Option<String>,

    /// Compare letters exactly instead of upper-casing both inputs
    #[arg(long)]
    case_sensitive: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Only print the traces, without the highlighted matrix tables
    #[arg(long, short)]
    brief: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Expand start cells in parallel
    #[arg(long)]
    parallel: bool,

    /// Also write the JSON report to this path
    #[arg(long, short, value_name = "PATH")]
    output: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORD_TRACE_DEBUG").is_ok();
    logging::init_logger(debug_enabled);

    match try_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(NOT_FOUND),
        Err(e) => {
            eprintln!(" [ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}

/// Resolves the input, traces the word and prints the report.
/// Returns whether the word was found at least once
fn try_main() -> Result<bool, CliError> {
    let cli = Cli::parse();

    let case = if cli.case_sensitive {
        CaseSensitivity::Sensitive
    } else {
        CaseSensitivity::Insensitive
    };
    let input = input::resolve(cli.matrix, cli.word, case, &mut StdinAsk)?;
    info!("Arguments accepted. Processing...");

    let options = SearchOptions {
        case,
        parallel: cli.parallel,
    };
    let paths = trace::search(&input.grid, &input.letters(), &options)?;
    debug!("'{}' traced {} time(s)", input.word, paths.len());

    let report = Report::new(&input.word, &input.grid, paths);
    if let Some(path) = &cli.output {
        serialization::save_to_disk(&report, path)?;
        info!("report written to {}", path);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            let opts = RenderOptions {
                color: !cli.no_color,
                brief: cli.brief,
            };
            text::write_text_report(&mut out, &report, opts)?;
        }
        OutputFormat::Json => json::write_json_report(&mut out, &report)?,
    }
    out.flush()?;

    Ok(report.is_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["word-trace", "abcdefghi", "adg", "--format", "json", "--parallel"]);
        assert_eq!(cli.matrix.as_deref(), Some("abcdefghi"));
        assert_eq!(cli.word.as_deref(), Some("adg"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.parallel);
        assert!(!cli.case_sensitive);

        let cli = Cli::parse_from(["word-trace"]);
        assert!(cli.matrix.is_none() && cli.word.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }
}
