use std::collections::HashSet;
use std::io::Write;

use super::{RenderOptions, Report};
use crate::errors::CliError;
use crate::trace::{Position, TracePath};

const RESET: &str = "\x1b[0m";
const HEADER_STYLE: &str = "\x1b[1;34m";
const HIGHLIGHT_STYLE: &str = "\x1b[1;93m";
const TRACE_STYLE: &str = "\x1b[1;30;42m";
const COUNT_STYLE: &str = "\x1b[1;44m";
const FOUND_STYLE: &str = "\x1b[32m";
const ERROR_STYLE: &str = "\x1b[1;97;41m";
const GRID_DUMP_STYLE: &str = "\x1b[33m";

fn paint(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

pub fn write_text_report<W: Write>(
    w: &mut W,
    report: &Report,
    opts: RenderOptions,
) -> Result<(), CliError> {
    if !report.is_found() {
        return write_not_found(w, report, opts);
    }

    if report.paths.len() > 1 {
        writeln!(
            w,
            " {}{}",
            paint("Results found: ", FOUND_STYLE, opts.color),
            paint(&format!(" {} ", report.paths.len()), COUNT_STYLE, opts.color)
        )?;
    } else {
        writeln!(w, "Result:")?;
    }
    writeln!(w)?;

    for path in &report.paths {
        writeln!(w, " Trace: {}", trace_line(path, opts.color))?;
        writeln!(w)?;
        if !opts.brief {
            write!(w, "{}", render_table(&report.grid, path, opts.color))?;
            writeln!(w)?;
        }
    }

    writeln!(w)?;
    Ok(())
}

/// Error banner followed by the unmatched grid
fn write_not_found<W: Write>(
    w: &mut W,
    report: &Report,
    opts: RenderOptions,
) -> Result<(), CliError> {
    let message = format!(
        " [ERROR] Whoops! The word \"{}\" not found in the matrix ",
        report.word
    );
    writeln!(w, "{}", paint(&message, ERROR_STYLE, opts.color))?;
    writeln!(w)?;
    if !opts.brief {
        for row in &report.grid {
            let letters: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            let line = format!("{}{}", " ".repeat(8), letters.join("   "));
            writeln!(w, "{}", paint(&line, GRID_DUMP_STYLE, opts.color))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn trace_line(path: &TracePath, color: bool) -> String {
    path.cells()
        .iter()
        .map(|pos| paint(&format!(" {} ", pos), TRACE_STYLE, color))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pads `text` on both sides to `width` visible characters
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(width - len - left))
}

/// Boxed table of the grid with row/column indexes, cells of `path` highlighted.
/// Without color the highlighted letters are bracketed instead
pub fn render_table(grid: &[Vec<char>], path: &TracePath, color: bool) -> String {
    let size = grid.len();
    let traced: HashSet<Position> = path.cells().iter().copied().collect();

    let index_width = size.saturating_sub(1).to_string().len();
    let inner = if color { index_width.max(1) } else { index_width.max(3) };
    let border = |left: &str, mid: &str, right: &str| {
        let segment = "─".repeat(inner + 2);
        format!("{}{}{}\n", left, vec![segment; size + 1].join(mid), right)
    };
    let line = |cells: Vec<String>| format!("│{}│\n", cells.join("│"));

    let mut out = String::new();
    out.push_str(&border("┌", "┬", "┐"));

    let mut header = vec![format!(" {} ", center("", inner))];
    for col in 0..size {
        let text = center(&col.to_string(), inner);
        header.push(format!(" {} ", paint(&text, HEADER_STYLE, color)));
    }
    out.push_str(&line(header));
    out.push_str(&border("├", "┼", "┤"));

    for (row, letters) in grid.iter().enumerate() {
        let text = center(&row.to_string(), inner);
        let mut cells = vec![format!(" {} ", paint(&text, HEADER_STYLE, color))];
        for (col, letter) in letters.iter().enumerate() {
            let cell = if !traced.contains(&Position::new(row, col)) {
                center(&letter.to_string(), inner)
            } else if color {
                paint(&center(&letter.to_string(), inner), HIGHLIGHT_STYLE, true)
            } else {
                center(&format!("[{}]", letter), inner)
            };
            cells.push(format!(" {} ", cell));
        }
        out.push_str(&line(cells));
    }

    out.push_str(&border("└", "┴", "┘"));
    out
}
