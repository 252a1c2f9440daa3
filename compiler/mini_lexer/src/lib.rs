//! Mini Lexer - character-at-a-time tokenizer.
//!
//! The lexer reads a byte stream strictly one byte at a time through a
//! [`CharStream`], which supports a single byte of putback. Each call to
//! [`next_token`] runs a small state machine from a fresh `Begin` state and
//! returns exactly one [`Token`](mini_ir::Token).
//!
//! # Line Counting
//!
//! The caller owns the line counter. Every newline read increments it; a
//! newline that is read and then put back decrements it again, so the
//! counter always reflects newlines actually consumed.
//!
//! # Errors
//!
//! Lexical errors do not abort scanning with a `Result`. They surface as a
//! token of kind `Err` whose lexeme is the offending text. [`Lexer`] also keeps
//! the typed [`LexError`] for callers that want structured diagnostics.

mod char_stream;
mod lex_error;
mod scanner;

pub use char_stream::CharStream;
pub use lex_error::LexError;
pub use scanner::{next_token, tokenize, Lexer};
