//! Bracket-structure validation for builder panes.
//!
//! Single pass over the characters with a stack of the three bracket
//! kinds. Brackets inside string literals count as real brackets;
//! accepted approximation (see crate docs).

use crate::diagnostic::{Diagnostic, Range};

fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '{' => '}',
        _ => ']',
    }
}

pub(crate) fn validate(content: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut stack: Vec<(char, u32, u32)> = Vec::new();
    let mut line = 1u32;
    let mut col = 1u32;

    for ch in content.chars() {
        match ch {
            '(' | '{' | '[' => stack.push((ch, line, col)),
            ')' | '}' | ']' => match stack.pop() {
                None => diagnostics.push(Diagnostic::error(
                    format!("extraneous closing bracket `{ch}`"),
                    Range::on_line(line, col, 1),
                )),
                Some((open, ..)) => {
                    let expected = closer_for(open);
                    if expected != ch {
                        diagnostics.push(Diagnostic::error(
                            format!("mismatched bracket: expected `{expected}`, found `{ch}`"),
                            Range::on_line(line, col, 1),
                        ));
                    }
                }
            },
            _ => {}
        }

        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    for (open, open_line, open_col) in stack {
        diagnostics.push(Diagnostic::error(
            format!("unclosed bracket `{open}`"),
            Range::on_line(open_line, open_col, 1),
        ));
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_chain_is_clean() {
        let source = "var n = Div(H1(Text(\"Hello\")).Class(\"title\")).Class(\"container\")";
        assert!(validate(source).is_empty());
    }

    #[test]
    fn test_unclosed_paren_reported_at_opening_position() {
        let diagnostics = validate("f(g(1)");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "unclosed bracket `(`");
        // `)` closes the innermost `(`; the one opened by `f(` remains.
        assert_eq!(diagnostics[0].range, Range::new(1, 2, 1, 3));
    }

    #[test]
    fn test_extraneous_closing_bracket() {
        let diagnostics = validate("Div())");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "extraneous closing bracket `)`");
        assert_eq!(diagnostics[0].range.start_col, 6);
    }

    #[test]
    fn test_mismatched_kinds() {
        let diagnostics = validate("map[bool]string{true: \"a\")");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "mismatched bracket: expected `}`, found `)`"
        );
    }

    #[test]
    fn test_multiline_positions() {
        let diagnostics = validate("Div(\n  P(\n)");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].range.start_line, 2);
        assert_eq!(diagnostics[0].range.start_col, 3);
    }

    #[test]
    fn test_string_brackets_count_by_design() {
        // The scanner does not understand string literals; `(` inside a
        // string is treated as real. Documented approximation.
        let diagnostics = validate("Text(\"(\")");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "unclosed bracket `(`");
    }
}
