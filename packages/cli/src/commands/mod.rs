mod check;
mod convert;

pub use check::{check, CheckArgs};
pub use convert::{convert, ConvertArgs};

use anyhow::Result;
use std::path::Path;
use tandem_diagnostics::Dialect;

/// Resolve the dialect of an input file from an explicit flag or its
/// extension.
pub(crate) fn resolve_dialect(path: &Path, flag: Option<&str>) -> Result<Dialect> {
    if let Some(name) = flag {
        return match name {
            "html" | "markup" => Ok(Dialect::Markup),
            "go" | "builder" => Ok(Dialect::Builder),
            other => Err(anyhow::anyhow!(
                "unknown dialect: {}. Use: html or go",
                other
            )),
        };
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => Ok(Dialect::Markup),
        Some("go") => Ok(Dialect::Builder),
        _ => Err(anyhow::anyhow!(
            "cannot infer dialect from {}; pass --dialect html|go",
            path.display()
        )),
    }
}
