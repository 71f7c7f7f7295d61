//! Fixed strings substituted for derived-pane content when no valid
//! conversion output exists.
//!
//! Every placeholder starts with one of a small set of markers so the
//! direction state machine can tell a placeholder from a genuine converted
//! result without tracking provenance.

use tandem_diagnostics::Dialect;

/// Shown in the builder pane while the markup source is empty.
pub const EMPTY_MARKUP_SOURCE: &str = "// Enter HTML on the markup side to generate Go code";

/// Shown in the markup pane while the builder source is empty.
pub const EMPTY_BUILDER_SOURCE: &str =
    "<!-- Enter Go builder code on the other side to generate HTML -->";

/// Rejection text for a bare conditional used as an expression value.
/// Known-unsupported construct; describes the two safe rewrites.
pub const BARE_CONDITIONAL: &str = r#"<!-- conversion rejected: a bare `if` cannot be used as an expression value -->
<!--
    // rewrite 1: wrap the conditional in a function call
    var n = Div().Text(func() string {
        if condition {
            return "yes"
        }
        return "no"
    }())

    // rewrite 2: key a lookup by the condition
    condition := true
    var n = Div().Text(map[bool]string{true: "yes", false: "no"}[condition])
-->
"#;

/// Rejection text for a malformed conditional statement (`if {`,
/// `if true {`, `if false {`).
pub const CONDITIONAL_SYNTAX: &str =
    "<!-- conversion rejected: conditional statement syntax error in the builder code -->";

/// Placeholder for an empty markup or builder source, keyed by the pane
/// the placeholder lands in.
pub fn empty_source(derived: Dialect) -> &'static str {
    match derived {
        Dialect::Builder => EMPTY_MARKUP_SOURCE,
        Dialect::Markup => EMPTY_BUILDER_SOURCE,
    }
}

/// Placeholder for a success response carrying empty output.
pub fn no_output(derived: Dialect) -> &'static str {
    match derived {
        Dialect::Builder => "// conversion produced no output",
        Dialect::Markup => "<!-- conversion produced no output -->",
    }
}

/// Error marker embedding the failure message.
pub fn conversion_error(derived: Dialect, message: &str) -> String {
    match derived {
        Dialect::Builder => format!("// conversion error: {message}"),
        Dialect::Markup => format!("<!-- conversion error: {message} -->"),
    }
}

/// Rejection text for unbalanced `{}` or `()` counts.
pub fn unbalanced(open: char, opens: usize, closes: usize) -> String {
    format!("<!-- conversion rejected: unbalanced `{open}` brackets: {opens} opening, {closes} closing -->")
}

/// Whether `text` is one of the fixed placeholders or error markers, as
/// opposed to a genuine converted result.
pub fn is_placeholder(text: &str) -> bool {
    const MARKERS: &[&str] = &[
        "// Enter ",
        "<!-- Enter ",
        "// conversion ",
        "<!-- conversion ",
    ];
    let trimmed = text.trim_start();
    MARKERS.iter().any(|marker| trimmed.starts_with(marker))
}
