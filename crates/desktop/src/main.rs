//! Console entry point for the invoice form.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use invoicer_desktop::{console, AppState, DesktopConfig};

#[derive(Debug, Parser)]
#[command(name = "invoicer", about = "Fill in an invoice and write it as a PDF")]
struct Cli {
    /// Directory generated invoices are written into.
    #[arg(long, short = 'o', default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    invoicer_observability::init_with_default("warn");

    let config = DesktopConfig::new(cli.output_dir);
    tracing::info!(output_dir = %config.output_dir.display(), "starting invoice form");
    let mut state = AppState::new(config).context("invalid render configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&mut state, stdin.lock(), stdout.lock()).context("console I/O failed")?;
    Ok(())
}
