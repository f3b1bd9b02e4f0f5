//! CLI command definitions
//!
//! Defines the clap commands for the Fibonacci CLI. Running without a
//! subcommand is the same as `run`.

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Prompt for a position, print its Fibonacci number, then count 1 to 10
    Run,

    /// Print the Fibonacci number at a position without prompting
    #[command(alias = "c")]
    Compute {
        /// Position in the sequence (0-indexed; negative positions yield 0)
        #[arg(allow_negative_numbers = true)]
        position: String,

        /// Output as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Print the counting loop only
    Count {
        /// First number printed (default from config, otherwise 1)
        #[arg(long, allow_negative_numbers = true)]
        from: Option<i64>,

        /// Last number printed (default from config, otherwise 10)
        #[arg(long, allow_negative_numbers = true)]
        to: Option<i64>,
    },
}
