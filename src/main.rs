//! CLI entry point for the tile grid generator

use clap::Parser;
use std::io::Write;
use tilecollapse::io::cli::{Cli, GridRunner};
use tilecollapse::io::logging::{init_logging, level_for_verbosity};

fn main() -> tilecollapse::Result<()> {
    let cli = Cli::parse();
    init_logging(level_for_verbosity(cli.verbose));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut runner = GridRunner::new(cli);
    runner.process(&mut out)?;
    out.flush()?;
    Ok(())
}
