use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tandem_diagnostics::Dialect;
use tandem_editor::{MemoryPane, PaneSurface};
use tandem_workbench::{
    ConversionOutcome, Direction, HttpBackend, Workbench, WorkbenchOptions,
};

use super::resolve_dialect;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file; direction is inferred from its dialect
    pub input: PathBuf,

    /// Conversion service endpoint
    #[arg(long, default_value = "http://localhost:8080/convert")]
    pub endpoint: String,

    /// Builder package prefix forwarded to the converter
    #[arg(long, default_value = "h")]
    pub prefix: String,

    /// Ask the converter to strip the leading package declaration
    #[arg(long)]
    pub remove_package: bool,
}

pub async fn convert(args: ConvertArgs) -> Result<()> {
    let dialect = resolve_dialect(&args.input, None)?;
    let direction = match dialect {
        Dialect::Markup => Direction::MarkupToBuilder,
        Dialect::Builder => Direction::BuilderToMarkup,
    };
    let source = fs::read_to_string(&args.input)?;

    let markup_pane = Arc::new(MemoryPane::default());
    let builder_pane = Arc::new(MemoryPane::default());
    let (source_pane, derived_pane) = match direction {
        Direction::MarkupToBuilder => (&markup_pane, &builder_pane),
        Direction::BuilderToMarkup => (&builder_pane, &markup_pane),
    };
    source_pane.set_content(&source);

    let workbench = Workbench::new(
        markup_pane.clone(),
        builder_pane.clone(),
        Arc::new(HttpBackend::new(args.endpoint)),
        direction,
        WorkbenchOptions {
            package_prefix: args.prefix,
            remove_package: args.remove_package,
            ..WorkbenchOptions::default()
        },
    );

    match workbench.convert_now().await {
        ConversionOutcome::Applied => {
            println!("{}", derived_pane.content());
            Ok(())
        }
        ConversionOutcome::SkippedEmpty | ConversionOutcome::Rejected => {
            // The derived pane holds the explanatory placeholder.
            println!("{}", derived_pane.content());
            std::process::exit(1);
        }
        ConversionOutcome::Failed(message) => {
            for diagnostic in source_pane.diagnostics() {
                eprintln!(
                    "{}:{}:{} {} {}",
                    args.input.display(),
                    diagnostic.range.start_line,
                    diagnostic.range.start_col,
                    "error".red().bold(),
                    diagnostic.message
                );
            }
            Err(anyhow::anyhow!("conversion failed: {}", message))
        }
        ConversionOutcome::DroppedInFlight => {
            // Single trigger in this command; cannot happen.
            unreachable!("no concurrent trigger in one-shot conversion")
        }
    }
}
