//! Wire contract of the remote converter.
//!
//! Field names and shapes are reproduced exactly for compatibility with
//! the deployed service; the serialization tests below pin them down.

use crate::direction::Direction;
use serde::{Deserialize, Serialize};

/// Request body sent to the converter. Exactly one variant per request,
/// selected by the active [`Direction`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConvertRequest {
    /// `{"html": ..., "packagePrefix": ..., "removePackage": ..., "direction": "html2go"}`
    MarkupToBuilder {
        html: String,
        #[serde(rename = "packagePrefix")]
        package_prefix: String,
        #[serde(rename = "removePackage", skip_serializing_if = "Option::is_none")]
        remove_package: Option<bool>,
        direction: String,
    },

    /// `{"goCode": ..., "direction": "go2html"}`
    BuilderToMarkup {
        #[serde(rename = "goCode")]
        go_code: String,
        direction: String,
    },
}

impl ConvertRequest {
    pub fn markup_to_builder(
        html: impl Into<String>,
        package_prefix: impl Into<String>,
        remove_package: Option<bool>,
    ) -> Self {
        Self::MarkupToBuilder {
            html: html.into(),
            package_prefix: package_prefix.into(),
            remove_package,
            direction: Direction::MarkupToBuilder.wire_tag().to_string(),
        }
    }

    pub fn builder_to_markup(go_code: impl Into<String>) -> Self {
        Self::BuilderToMarkup {
            go_code: go_code.into(),
            direction: Direction::BuilderToMarkup.wire_tag().to_string(),
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::MarkupToBuilder { .. } => Direction::MarkupToBuilder,
            Self::BuilderToMarkup { .. } => Direction::BuilderToMarkup,
        }
    }

    /// The source text carried by the request.
    pub fn source(&self) -> &str {
        match self {
            Self::MarkupToBuilder { html, .. } => html,
            Self::BuilderToMarkup { go_code, .. } => go_code,
        }
    }
}

/// Response body from the converter.
///
/// Success carries `code` (html2go) or `html` (go2html). The service may
/// also answer 200 with both an output and an `error` field; the error
/// wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertResponse {
    pub code: Option<String>,
    pub html: Option<String>,
    pub error: Option<String>,
}

impl ConvertResponse {
    /// The output field matching the request direction.
    pub fn output_for(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::MarkupToBuilder => self.code.as_deref(),
            Direction::BuilderToMarkup => self.html.as_deref(),
        }
    }

    /// Name of the field `output_for` would read, for error reporting.
    pub fn output_field(direction: Direction) -> &'static str {
        match direction {
            Direction::MarkupToBuilder => "code",
            Direction::BuilderToMarkup => "html",
        }
    }
}
