//! Output formatting for the CLI commands.
//!
//! Rendering functions take a writer so they can be tested without touching
//! stdout. Colors follow `colored`'s global switch (`NO_COLOR`).

use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::directives::{ClassifiedLine, LineKind};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Width of the kind column in `lines` output ("literal").
const KIND_WIDTH: usize = 7;

/// Print the outcome of a tag check.
pub fn print_check_to<W: Write>(found: bool, tag: &str, writer: &mut W) -> Result<()> {
    if found {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("@{} found", tag).green()
        )?;
    } else {
        writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("@{} not found", tag).red()
        )?;
    }
    Ok(())
}

/// Print a cleaned comment, terminated by a newline unless it is empty.
pub fn print_cleaned_to<W: Write>(cleaned: &str, writer: &mut W) -> Result<()> {
    if cleaned.is_empty() {
        return Ok(());
    }
    write!(writer, "{}", cleaned)?;
    if !cleaned.ends_with('\n') {
        writeln!(writer)?;
    }
    Ok(())
}

/// Print one row per line: number, kind and the line text.
///
/// `tag` is the marker tag; lines carrying it are labelled `marker`.
pub fn print_lines_to<W: Write>(lines: &[ClassifiedLine], tag: &str, writer: &mut W) -> Result<()> {
    let max_line_width = lines.len().to_string().len();

    for line in lines {
        let label = format!("{:<width$}", kind_label(&line.kind, tag), width = KIND_WIDTH);
        let label = match line.kind {
            LineKind::Text => label.normal(),
            LineKind::Tag { name, .. } if name == tag => label.bold().green(),
            LineKind::Tag { .. } => label.yellow(),
            LineKind::Literal { .. } => label.cyan(),
        };
        let text = line.text.strip_suffix('\r').unwrap_or(line.text);

        write!(
            writer,
            "{:>width$} {} {} {}",
            line.line.to_string().blue(),
            "|".blue(),
            label,
            "|".blue(),
            width = max_line_width
        )?;
        if text.is_empty() {
            writeln!(writer)?;
        } else {
            writeln!(writer, " {}", text)?;
        }
    }
    Ok(())
}

/// Print lines as a pretty JSON array.
pub fn print_lines_json_to<W: Write>(lines: &[ClassifiedLine], writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, lines)?;
    writeln!(writer)?;
    Ok(())
}

fn kind_label(kind: &LineKind, tag: &str) -> &'static str {
    match kind {
        LineKind::Text => "text",
        LineKind::Tag { name, .. } if *name == tag => "marker",
        LineKind::Tag { .. } => "tag",
        LineKind::Literal { .. } => "literal",
    }
}
