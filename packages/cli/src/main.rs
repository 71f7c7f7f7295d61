mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, convert, CheckArgs, ConvertArgs};

/// Tandem CLI - bidirectional HTML / Go builder workbench
#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a file's tag or bracket structure
    Check(CheckArgs),

    /// Convert a file through the remote converter
    Convert(ConvertArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(args) => check(args),
        Command::Convert(args) => convert(args).await,
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
