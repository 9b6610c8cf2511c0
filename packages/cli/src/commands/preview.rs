use super::load_snapshot;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use weaver_exporter::{ExportSession, StaticFetcher};
use weaver_model::InMemoryRegistry;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Project snapshot JSON file
    pub snapshot: PathBuf,

    /// List generated paths without file contents
    #[arg(long)]
    pub list: bool,
}

pub fn preview(args: PreviewArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let registry = InMemoryRegistry::new(snapshot.registry);

    let mut session = ExportSession::new(&registry, Box::new(StaticFetcher::empty()));
    let bundle = session.preview(&snapshot.input)?;

    println!(
        "{} {} files",
        "👁  Preview".bright_blue().bold(),
        bundle.files.len()
    );

    for (path, content) in &bundle.files {
        if args.list {
            println!("  {}", path);
        } else {
            println!();
            println!("{}", format!("--- {} ---", path).dimmed());
            println!("{}", content);
        }
    }

    Ok(())
}
