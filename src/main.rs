//! Fibonacci CLI - prints the n-th Fibonacci number and counts to ten

use clap::Parser;
use fibonacci::commands::Commands;
use fibonacci::common::logging;
use fibonacci::cli;

#[derive(Parser)]
#[command(name = "fibonacci", about = "Arbitrary-precision Fibonacci calculator")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
