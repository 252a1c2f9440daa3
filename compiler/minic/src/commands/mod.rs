//! Command handlers for the `mini` CLI.
//!
//! Each submodule implements one mode. Shared input handling lives here.
//! Handlers read the program from any `Read`, write their report to `out`,
//! and return the process exit status.

use std::fs::File;
use std::io::{self, Read};

mod run;
mod stats;
mod tokens;

pub use run::{check_program, run_program};
pub use stats::print_stats;
pub use tokens::print_tokens;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Open the program source: the named file, or stdin for `None` or `-`.
///
/// The error is the diagnostic to show the user.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn Read>, String> {
    match path {
        None | Some("-") => Ok(Box::new(io::stdin())),
        Some(path) => match File::open(path) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) => {
                tracing::debug!(path, error = %e, "open failed");
                Err(format!("COULD NOT OPEN {path}"))
            }
        },
    }
}

#[cfg(test)]
mod tests;
