use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use migrator::{expand_inputs, Config, MarkdownRenderer, Migrator, Report};

/// Migrate scraped blog posts into Hugo-ready Markdown.
#[derive(Parser, Debug)]
struct Cli {
    /// Collection of files to process
    #[arg(value_name = "FILE", required = true)]
    files: Vec<String>,
    /// Output directory if not $CWD
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Per-file failures are in the report; only setup errors are `Err`.
fn run(opt: Cli) -> Result<Report> {
    let config = match opt.config.as_ref() {
        Some(path) => Config::read(path)?,
        None => Config::default(),
    };
    let migrator = Migrator::new(
        config.output_dir(opt.output),
        MarkdownRenderer::new(config.emphasis),
    )?;
    Ok(migrator.run(&expand_inputs(&opt.files)))
}

fn main() -> Result<()> {
    let opt = Cli::parse();
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    run(opt)?;
    Ok(())
}
