//! Best-effort mapping of remote error text onto source locations.
//!
//! The converter reports failures as free text, so location recovery is an
//! ordered list of independent string matchers with a first-match-wins
//! policy. A matcher only wins when it actually produces a diagnostic;
//! the final fallback guarantees every failure is visible somewhere.
//! Wrong locations are acceptable, silence is not.

use crate::diagnostic::{Diagnostic, Range};
use regex::Regex;

/// Anchor `error_message` onto `source`. Never returns an empty set.
pub fn locate(error_message: &str, source: &str) -> Vec<Diagnostic> {
    if let Some(found) = match_line_column(error_message, source) {
        return found;
    }
    if let Some(found) = match_tag_name(error_message, source) {
        return found;
    }
    if let Some(found) = match_undefined(error_message, source) {
        return found;
    }
    vec![whole_buffer(error_message, source)]
}

/// Rule 1: `line N` with an optional `column M` (column defaults to 1).
/// Anchors one diagnostic from there to the end of that line.
fn match_line_column(message: &str, source: &str) -> Option<Vec<Diagnostic>> {
    let re = Regex::new(r"(?i)\bline\s+(\d+)(?:\s*,?\s*column\s+(\d+))?").unwrap();
    let captures = re.captures(message)?;

    let line: u32 = captures[1].parse().ok()?;
    let col: u32 = captures
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1);

    let line_count = source.lines().count().max(1) as u32;
    let line = line.clamp(1, line_count);
    let end_col = line_len(source, line) + 1;

    Some(vec![Diagnostic::error(
        message,
        Range::new(line, col.min(end_col), line, end_col),
    )])
}

/// Rule 2: a quoted markup tag `<name>` in the message. One diagnostic per
/// opening-tag occurrence in the source, spanning the matched tag text.
fn match_tag_name(message: &str, source: &str) -> Option<Vec<Diagnostic>> {
    let name_re = Regex::new(r"<([A-Za-z][A-Za-z0-9_:-]*)>").unwrap();
    let name = name_re.captures(message)?.get(1)?.as_str();

    let tag_re = Regex::new(&format!(r"<{}\b[^>]*>", regex::escape(name))).unwrap();
    let diagnostics: Vec<Diagnostic> = tag_re
        .find_iter(source)
        .map(|found| Diagnostic::error(message, span_range(source, found.start(), found.end())))
        .collect();

    if diagnostics.is_empty() {
        return None;
    }
    Some(diagnostics)
}

/// Rule 3: an `undefined: name` pattern. One diagnostic per whole-word
/// occurrence of the identifier in the source.
fn match_undefined(message: &str, source: &str) -> Option<Vec<Diagnostic>> {
    let undef_re = Regex::new(r"undefined:?\s+`?([A-Za-z_][A-Za-z0-9_]*)`?").unwrap();
    let name = undef_re.captures(message)?.get(1)?.as_str();

    let word_re = Regex::new(&format!(r"\b{}\b", regex::escape(name))).unwrap();
    let diagnostics: Vec<Diagnostic> = word_re
        .find_iter(source)
        .map(|found| Diagnostic::error(message, span_range(source, found.start(), found.end())))
        .collect();

    if diagnostics.is_empty() {
        return None;
    }
    Some(diagnostics)
}

/// Rule 4: no structured hint recognized. One diagnostic spanning the
/// entire buffer, carrying the raw message.
fn whole_buffer(message: &str, source: &str) -> Diagnostic {
    let last_line = source.lines().count().max(1) as u32;
    Diagnostic::error(
        message,
        Range::new(1, 1, last_line, line_len(source, last_line) + 1),
    )
}

/// 1-based (line, col) of the char at `byte_offset`.
fn position_at(source: &str, byte_offset: usize) -> (u32, u32) {
    let mut line = 1u32;
    let mut col = 1u32;
    for (idx, ch) in source.char_indices() {
        if idx >= byte_offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

fn span_range(source: &str, start: usize, end: usize) -> Range {
    let (start_line, start_col) = position_at(source, start);
    let (end_line, end_col) = position_at(source, end);
    Range::new(start_line, start_col, end_line, end_col)
}

/// Column count of a 1-based line (0 when the line does not exist).
fn line_len(source: &str, line: u32) -> u32 {
    source
        .lines()
        .nth(line as usize - 1)
        .map(|l| l.chars().count() as u32)
        .unwrap_or(0)
}
