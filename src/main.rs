#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::{Context, Result};
use clap::Parser;
use fitcalc::{cli, sessions, training, utils};
use std::io::{self, Write};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let sessions = sessions::builtin();
    dlog!("mode=report sessions={}", sessions.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for s in &sessions {
        writeln!(out, "{}", training::read_data(s.as_ref())).context("writing report")?;
    }
    out.flush().context("flushing stdout")?;

    tracing::info!(reports = sessions.len(), "done");
    Ok(())
}
