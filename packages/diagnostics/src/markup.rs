//! Tag-structure validation for markup panes.
//!
//! A single-pass scanner matches opening, closing and self-closing tags
//! while ignoring attribute internals, then checks nesting with a
//! last-in-first-out stack of open tag names. Tags inside `<script>`
//! bodies or string literals are treated as real tags; accepted
//! approximation (see crate docs).

use crate::diagnostic::{Diagnostic, Range};

/// Elements the converter accepts without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[derive(Debug, PartialEq)]
enum TagKind {
    Opening,
    Closing,
    SelfClosing,
}

#[derive(Debug)]
struct ScannedTag {
    name: String,
    kind: TagKind,
    range: Range,
}

struct OpenTag {
    name: String,
    range: Range,
}

pub(crate) fn validate(content: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut stack: Vec<OpenTag> = Vec::new();

    for tag in scan_tags(content) {
        match tag.kind {
            TagKind::SelfClosing => {}
            TagKind::Opening => {
                if VOID_TAGS.contains(&tag.name.to_ascii_lowercase().as_str()) {
                    continue;
                }
                stack.push(OpenTag {
                    name: tag.name,
                    range: tag.range,
                });
            }
            TagKind::Closing => match stack.pop() {
                None => diagnostics.push(Diagnostic::error(
                    format!("extraneous closing tag `</{}>`", tag.name),
                    tag.range,
                )),
                Some(open) => {
                    if open.name != tag.name {
                        diagnostics.push(Diagnostic::error(
                            format!(
                                "mismatched closing tag: expected `</{}>`, found `</{}>`",
                                open.name, tag.name
                            ),
                            tag.range,
                        ));
                        // The popped tag is still open; its correct closer
                        // later on must not be reported as extraneous.
                        stack.push(open);
                    }
                }
            },
        }
    }

    for open in stack {
        diagnostics.push(Diagnostic::error(
            format!("unclosed tag `<{}>`", open.name),
            open.range,
        ));
    }

    diagnostics
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':'
}

fn starts_with_at(chars: &[char], i: usize, pat: &str) -> bool {
    pat.chars().enumerate().all(|(k, p)| chars.get(i + k) == Some(&p))
}

/// Scan all tags in document order. Comments, doctype declarations and
/// processing instructions are skipped; a `<` not followed by a letter or
/// `/` is plain text.
fn scan_tags(content: &str) -> Vec<ScannedTag> {
    let chars: Vec<char> = content.chars().collect();

    // Per-char 1-based (line, col), plus one trailing entry for end-of-input.
    let mut positions = Vec::with_capacity(chars.len() + 1);
    let mut line = 1u32;
    let mut col = 1u32;
    for &c in &chars {
        positions.push((line, col));
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    positions.push((line, col));

    let mut tags = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '<' {
            i += 1;
            continue;
        }

        if starts_with_at(&chars, i, "<!--") {
            let mut j = i + 4;
            while j < chars.len() && !starts_with_at(&chars, j, "-->") {
                j += 1;
            }
            i = (j + 3).min(chars.len());
            continue;
        }

        match chars.get(i + 1) {
            Some('!') | Some('?') => {
                // <!DOCTYPE ...> or processing instruction: skip to `>`
                let mut j = i + 2;
                while j < chars.len() && chars[j] != '>' {
                    j += 1;
                }
                i = (j + 1).min(chars.len());
            }
            Some('/') => {
                let mut j = i + 2;
                let name: String = chars[j..]
                    .iter()
                    .take_while(|c| is_name_char(**c))
                    .collect();
                j += name.chars().count();
                while j < chars.len() && chars[j] != '>' {
                    j += 1;
                }
                if j >= chars.len() || name.is_empty() {
                    // Unterminated or nameless closer; nothing to match.
                    i += 1;
                    continue;
                }
                let (start_line, start_col) = positions[i];
                let (end_line, end_col) = positions[j + 1];
                tags.push(ScannedTag {
                    name,
                    kind: TagKind::Closing,
                    range: Range::new(start_line, start_col, end_line, end_col),
                });
                i = j + 1;
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let name: String = chars[i + 1..]
                    .iter()
                    .take_while(|c| is_name_char(**c))
                    .collect();
                let mut j = i + 1 + name.chars().count();
                while j < chars.len() && chars[j] != '>' {
                    j += 1;
                }
                if j >= chars.len() {
                    i += 1;
                    continue;
                }
                let kind = if j > 0 && chars[j - 1] == '/' {
                    TagKind::SelfClosing
                } else {
                    TagKind::Opening
                };
                let (start_line, start_col) = positions[i];
                let (end_line, end_col) = positions[j + 1];
                tags.push(ScannedTag {
                    name,
                    kind,
                    range: Range::new(start_line, start_col, end_line, end_col),
                });
                i = j + 1;
            }
            _ => i += 1,
        }
    }

    tags
}
