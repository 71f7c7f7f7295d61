//! Local repair pass for Builder→Markup requests.
//!
//! Known-bad input is rejected before it reaches the boundary; input
//! without a top-level `n` binding is wrapped in a synthetic one so the
//! converter always receives a well-formed declaration.

use crate::placeholder;
use regex::Regex;

/// Result of the pre-flight pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Preflight {
    /// Send this (possibly rewritten) source to the boundary.
    Send(String),
    /// Do not contact the boundary; show this markup placeholder instead.
    Reject(String),
}

pub fn prepare(source: &str) -> Preflight {
    if is_bare_conditional(source) {
        return Preflight::Reject(placeholder::BARE_CONDITIONAL.to_string());
    }
    if has_conditional_syntax_error(source) {
        return Preflight::Reject(placeholder::CONDITIONAL_SYNTAX.to_string());
    }
    if let Some(rejection) = check_balance(source) {
        return Preflight::Reject(rejection);
    }
    Preflight::Send(ensure_binding(source))
}

/// A bare `if` on the right-hand side of the output binding. The builder
/// language has no conditional expressions; the converter cannot parse
/// this, so it is rejected with rewrite advice instead.
fn is_bare_conditional(source: &str) -> bool {
    let re = Regex::new(r"(?:var\s+n\s*=|n\s*:=)\s*if\b").unwrap();
    re.is_match(source)
        || source.contains("n = if")
        || source.contains("= if true")
        || source.contains("= if false")
}

/// A conditional with no condition, or with a constant one. The converter
/// chokes on these even in statement position.
fn has_conditional_syntax_error(source: &str) -> bool {
    source.contains("if {") || source.contains("if true {") || source.contains("if false {")
}

/// Count-only balance check for `{}` and `()`. Known-unbalanced input is
/// never sent to the boundary.
fn check_balance(source: &str) -> Option<String> {
    for (open, close) in [('{', '}'), ('(', ')')] {
        let opens = source.matches(open).count();
        let closes = source.matches(close).count();
        if opens != closes {
            return Some(placeholder::unbalanced(open, opens, closes));
        }
    }
    None
}

/// Wrap the first expression line in `var n = ...` when the source has no
/// top-level binding for the expected output variable.
fn ensure_binding(source: &str) -> String {
    if source.contains("var n =") || source.contains("n :=") {
        return source.to_string();
    }

    let first_expression = source
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("//"));

    match first_expression {
        Some(expression) => format!("var n = {expression}"),
        None => source.to_string(),
    }
}
