use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tandem_diagnostics::{validate, Severity};

use super::resolve_dialect;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input file (.html/.htm for markup, .go for builder code)
    pub input: PathBuf,

    /// Override dialect detection (html, go)
    #[arg(short, long)]
    pub dialect: Option<String>,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let dialect = resolve_dialect(&args.input, args.dialect.as_deref())?;
    let source = fs::read_to_string(&args.input)?;

    let diagnostics = validate(&source, dialect);

    if diagnostics.is_empty() {
        println!("{} {}", "✓".green(), args.input.display());
        return Ok(());
    }

    let mut errors = 0;
    for diagnostic in &diagnostics {
        let level = match diagnostic.severity {
            Severity::Error => {
                errors += 1;
                "error".red().bold()
            }
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
        };
        println!(
            "{}:{}:{} {} {}",
            args.input.display(),
            diagnostic.range.start_line,
            diagnostic.range.start_col,
            level,
            diagnostic.message
        );
    }

    println!();
    println!("   Total diagnostics: {}", diagnostics.len());

    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
