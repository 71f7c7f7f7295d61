use serde::{Deserialize, Serialize};

/// Which surface language a pane currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Tag-structured markup (HTML).
    Markup,
    /// Expression-structured builder code (htmlgo-style Go).
    Builder,
}

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Source range with 1-based line and column numbers.
///
/// `end_col` points one past the last column of the range, so a single
/// character at line 1 column 3 spans `(1, 3)..(1, 4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Range {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Range covering `len` columns on a single line.
    pub fn on_line(line: u32, start_col: u32, len: u32) -> Self {
        Self::new(line, start_col, line, start_col + len)
    }
}

/// A structured annotation surfaced to the editing surface without
/// altering buffer content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// Source location the message is anchored to
    pub range: Range,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, range: Range) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            range,
        }
    }

    pub fn warning(message: impl Into<String>, range: Range) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            range,
        }
    }

    pub fn info(message: impl Into<String>, range: Range) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_range() {
        let range = Range::on_line(2, 5, 1);
        assert_eq!(range, Range::new(2, 5, 2, 6));
    }

    #[test]
    fn test_diagnostic_constructors() {
        let d = Diagnostic::error("boom", Range::on_line(1, 1, 3));
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.message, "boom");
    }
}
