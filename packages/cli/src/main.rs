mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{export, preview, ExportArgs, PreviewArgs};

/// Weaver - export visual builder projects to deployable source trees
#[derive(Parser, Debug)]
#[command(name = "weaver")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a project snapshot to a downloadable archive
    Export(ExportArgs),

    /// Generate the live-preview file map for a project snapshot
    Preview(PreviewArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing_subscriber::filter::LevelFilter::DEBUG
        } else {
            tracing_subscriber::filter::LevelFilter::WARN
        })
        .init();

    let result = match cli.command {
        Command::Export(args) => export(args),
        Command::Preview(args) => preview(args),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "✗".red(), err.to_string().red());
        std::process::exit(1);
    }
}
