//! Mini interpreter CLI.

use std::io::{self, Write};

use minic::cli::{parse_args, Command, Mode, UsageError, USAGE};
use minic::commands::{
    check_program, open_input, print_stats, print_tokens, run_program, EXIT_FAILURE,
};

fn main() {
    minic::init_tracing();

    let invocation = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Execute(invocation)) => invocation,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(error @ UsageError::TooManyFilenames) => {
            eprintln!("{error}");
            std::process::exit(EXIT_FAILURE);
        }
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    let input = match open_input(invocation.file.as_deref()) {
        Ok(input) => input,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    // Not locked: program output goes through `println!` between reports.
    let mut out = io::stdout();
    let status = match invocation.mode {
        Mode::Run => run_program(input, mini_eval::stdout_handler(), &mut out),
        Mode::Check => check_program(input, &mut out),
        Mode::Tokens => print_tokens(input, &mut out),
        Mode::Stats => print_stats(input, &mut out),
    };
    let status = match status.and_then(|status| out.flush().map(|()| status)) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("error writing output: {e}");
            EXIT_FAILURE
        }
    };
    std::process::exit(status);
}
