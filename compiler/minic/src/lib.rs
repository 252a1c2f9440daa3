//! Minic - command-line driver for the mini language.
//!
//! The `mini` binary is a thin shell over this library: argument parsing
//! lives in [`cli`], each mode in [`commands`]. Commands write to a caller
//! supplied sink and return an exit status, so they can be driven from
//! tests without spawning a process.

pub mod cli;
pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
