//! `--tokens`: dump the token stream.

use std::io::{self, Read, Write};

use mini_ir::TokenKind;
use mini_lexer::{CharStream, Lexer};

use super::{EXIT_FAILURE, EXIT_SUCCESS};

/// Print one token per line up to and including `DONE` or `ERR`.
///
/// Fails if the stream ended in `ERR`.
pub fn print_tokens<R: Read, W: Write>(source: R, out: &mut W) -> io::Result<i32> {
    let mut status = EXIT_SUCCESS;
    for token in Lexer::new(CharStream::buffered(source)) {
        writeln!(out, "{token}")?;
        if token.kind == TokenKind::Err {
            status = EXIT_FAILURE;
        }
    }
    Ok(status)
}
