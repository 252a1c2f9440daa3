//! Default mode and `--check`.

use std::io::{self, Read, Write};

use mini_eval::{silent_handler, InterpreterBuilder, SharedPrintHandler};

use super::{EXIT_FAILURE, EXIT_SUCCESS};

/// Parse and run a program, sending `print` output to `handler`.
///
/// Parse errors are reported as `<line>: <message>`. Runtime errors are
/// reported as `0: RUNTIME ERROR <message>`; the real line is logged.
pub fn run_program<R: Read, W: Write>(
    source: R,
    handler: SharedPrintHandler,
    out: &mut W,
) -> io::Result<i32> {
    let program = match mini_parse::parse_reader(source) {
        Ok(program) => program,
        Err(error) => {
            writeln!(out, "{error}")?;
            return Ok(EXIT_FAILURE);
        }
    };
    let Some(program) = program else {
        return Ok(EXIT_SUCCESS);
    };

    let mut interpreter = InterpreterBuilder::new().print_handler(handler).build();
    match interpreter.run(&program) {
        Ok(()) => Ok(EXIT_SUCCESS),
        Err(error) => {
            tracing::debug!(line = ?error.line(), "reporting runtime error");
            writeln!(out, "0: RUNTIME ERROR {error}")?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Parse and run a program with `print` output discarded.
pub fn check_program<R: Read, W: Write>(source: R, out: &mut W) -> io::Result<i32> {
    run_program(source, silent_handler(), out)
}
