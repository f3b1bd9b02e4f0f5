//! CLI command handling
//!
//! Dispatches CLI commands and formats output.

pub mod interactive;

use std::io::{self, Write};

use serde::Serialize;

use crate::commands::Commands;
use crate::common::{Config, Result};
use crate::sequence::fibonacci;

/// JSON shape printed by `compute --json`
#[derive(Debug, Serialize)]
pub struct ComputeOutput {
    pub n: i64,
    /// Decimal digits of the value; a string because it is unbounded
    pub value: String,
}

impl ComputeOutput {
    pub fn new(n: i64) -> Self {
        let value = fibonacci(n);
        tracing::debug!(n, bits = value.bits(), "computed fibonacci number");
        Self {
            n,
            value: value.to_string(),
        }
    }
}

/// Dispatch a CLI command against the process's stdin/stdout
///
/// Only `count` consults the config file; `run` and `compute` never touch
/// the filesystem.
pub fn dispatch(command: Option<Commands>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            interactive::run(&mut input, &mut out)
        }

        Commands::Compute { position, json } => compute(&position, json, &mut out),

        Commands::Count { from, to } => {
            let config = Config::load()?;
            let start = from.unwrap_or(config.count.start);
            let end = to.unwrap_or(config.count.end);
            interactive::write_count(&mut out, start, end)
        }
    }
}

/// Print the Fibonacci number for a position given on the command line
pub fn compute<W: Write>(position: &str, json: bool, out: &mut W) -> Result<()> {
    let n = interactive::parse_index(position)?;

    if json {
        let line = serde_json::to_string(&ComputeOutput::new(n))?;
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "{}", interactive::answer_line(n))?;
    }
    Ok(())
}
