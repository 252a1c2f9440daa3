//! Argument parsing for `mini [--tokens | --stats | --check] [FILE]`.

use thiserror::Error;

pub const USAGE: &str = "\
usage: mini [--tokens | --stats | --check] [FILE]

Runs a mini program read from FILE, or from standard input.

modes:
  (default)   parse and run the program
  --tokens    print the token stream
  --stats     print tree statistics without running
  --check     parse and run with print output discarded
  -h, --help  show this message

environment:
  RUST_LOG        log filter, e.g. RUST_LOG=mini_eval=debug
  MINI_LOG_TREE   draw logs as an indented span tree";

/// What to do with the program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Run,
    Tokens,
    Stats,
    Check,
}

/// A fully parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    /// Source file; standard input when absent.
    pub file: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Execute(Invocation),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("TOO MANY FILENAMES")]
    TooManyFilenames,
    #[error("unknown option {0}")]
    UnknownOption(String),
}

/// Parse arguments, not including the program name.
///
/// A later mode flag overrides an earlier one.
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut invocation = Invocation::default();
    for arg in args {
        let arg: String = arg.into();
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--tokens" => invocation.mode = Mode::Tokens,
            "--stats" => invocation.mode = Mode::Stats,
            "--check" => invocation.mode = Mode::Check,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(UsageError::UnknownOption(arg));
            }
            _ => {
                if invocation.file.is_some() {
                    return Err(UsageError::TooManyFilenames);
                }
                invocation.file = Some(arg);
            }
        }
    }
    Ok(Command::Execute(invocation))
}
