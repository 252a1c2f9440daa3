//! Mini Eval - tree-walking evaluator for the mini language.
//!
//! # Architecture
//!
//! - `value`: the dynamic `Value` kinds and their rendering
//! - `operators`: binary operator semantics over values
//! - `environment`: the binding table
//! - `print_handler`: where `print` output goes
//! - `interpreter`: `Interpreter` and `InterpreterBuilder`
//! - `errors`: `EvalError` and its factory functions
//!
//! Runtime errors are fatal. They surface as `Err(EvalError)` from
//! [`Interpreter::run`] and evaluation does not resume afterwards.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;
