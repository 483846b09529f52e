//! syscage constants and logging utility.

pub mod clap;
pub mod log;

/// Shell used to run the target command line.
pub const SHELL_BIN: &str = "/bin/sh";

/// Size of the buffer used when relaying the child's combined output.
pub const OUTPUT_CHUNK_SIZE: usize = 4096;

pub const SYSCAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
