//! Plotwise command-line interface library.
//!
//! Exposes the CLI surface as a library so command execution and report
//! rendering can be exercised without spawning a process.

pub mod cli;
pub mod logging;
