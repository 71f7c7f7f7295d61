use serde::{Deserialize, Serialize};
use tandem_diagnostics::Dialect;

/// Which way the next conversion runs.
///
/// Process-wide for a workbench instance; changed only by explicit user
/// action through `Workbench::set_direction`. Conversion outcomes never
/// flip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    MarkupToBuilder,
    BuilderToMarkup,
}

impl Direction {
    /// Dialect of the pane holding the source of truth.
    pub fn source_dialect(self) -> Dialect {
        match self {
            Direction::MarkupToBuilder => Dialect::Markup,
            Direction::BuilderToMarkup => Dialect::Builder,
        }
    }

    /// Dialect of the pane the conversion output lands in.
    pub fn derived_dialect(self) -> Dialect {
        match self {
            Direction::MarkupToBuilder => Dialect::Builder,
            Direction::BuilderToMarkup => Dialect::Markup,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::MarkupToBuilder => Direction::BuilderToMarkup,
            Direction::BuilderToMarkup => Direction::MarkupToBuilder,
        }
    }

    /// Tag the remote converter dispatches on.
    pub fn wire_tag(self) -> &'static str {
        match self {
            Direction::MarkupToBuilder => "html2go",
            Direction::BuilderToMarkup => "go2html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_assignment() {
        assert_eq!(Direction::MarkupToBuilder.source_dialect(), Dialect::Markup);
        assert_eq!(
            Direction::MarkupToBuilder.derived_dialect(),
            Dialect::Builder
        );
        assert_eq!(
            Direction::BuilderToMarkup.source_dialect(),
            Dialect::Builder
        );
        assert_eq!(Direction::BuilderToMarkup.derived_dialect(), Dialect::Markup);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for direction in [Direction::MarkupToBuilder, Direction::BuilderToMarkup] {
            assert_eq!(direction.toggled().toggled(), direction);
        }
    }

    #[test]
    fn test_wire_tags() {
        assert_eq!(Direction::MarkupToBuilder.wire_tag(), "html2go");
        assert_eq!(Direction::BuilderToMarkup.wire_tag(), "go2html");
    }
}
