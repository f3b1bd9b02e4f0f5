//! Fibonacci CLI - arbitrary-precision Fibonacci numbers from the terminal
//!
//! The library exposes the pure computation in [`sequence`] and the
//! interactive driver used by the `fibonacci` binary.

pub mod cli;
pub mod commands;
pub mod common;
pub mod sequence;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use sequence::fibonacci;
