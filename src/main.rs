use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vending_machine::domain::catalog::Catalog;
use vending_machine::interfaces::console::console_machine;
use vending_machine::interfaces::console::session::Session;
use vending_machine::interfaces::console::terminal::Terminal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON catalog of products and coins. Defaults to the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the display without colors.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(!cli.no_color)
        .with_writer(io::stderr)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Catalog::load(path).into_diagnostic()?
        }
        None => Catalog::standard(),
    };

    let terminal = Terminal::new(io::stdout(), !cli.no_color);
    let machine = console_machine(Arc::new(catalog), &terminal).into_diagnostic()?;

    Session::new(machine, terminal, io::stdin().lock())
        .run()
        .into_diagnostic()?;

    Ok(())
}
