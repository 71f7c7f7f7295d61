//! # Structural Diagnostics
//!
//! Lightweight well-formedness checks for the two Tandem surface languages:
//! tag-structured markup and bracket/expression-structured builder code.
//!
//! These are heuristic scanners, not grammars. They do not understand
//! string or comment literals, so a bracket inside a string counts as a
//! real bracket. That gap is accepted by design; the goal is immediate
//! feedback in time linear in content length, not soundness.

pub mod diagnostic;
pub mod locator;

mod builder;
mod markup;

pub use diagnostic::{Diagnostic, Dialect, Range, Severity};
pub use locator::locate;

/// Validate `content` against the structural rules of `dialect`.
///
/// Pure function of its input; every call produces a fresh, ordered
/// diagnostic set. An empty result means the content is well-nested as far
/// as the scanner can tell.
pub fn validate(content: &str, dialect: Dialect) -> Vec<Diagnostic> {
    match dialect {
        Dialect::Markup => markup::validate(content),
        Dialect::Builder => builder::validate(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_nested_markup_is_clean() {
        let source = "<div><p>hello</p></div>";
        assert!(validate(source, Dialect::Markup).is_empty());
    }

    #[test]
    fn test_balanced_builder_is_clean() {
        let source = "var n = Div(P(Text(\"hello\")))";
        assert!(validate(source, Dialect::Builder).is_empty());
    }
}
