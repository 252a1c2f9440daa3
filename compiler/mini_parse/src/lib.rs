//! Recursive descent parser for mini.
//!
//! Pulls tokens from a [`Lexer`] on demand with one token of pushback and
//! builds an owned [`Node`] tree. The grammar lives in [`grammar`]; this
//! module holds the parser state and token plumbing.

mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};

use std::io::Read;

use mini_ir::{Node, Token, TokenKind};
use mini_lexer::{CharStream, Lexer};

/// Parser state.
pub struct Parser<R> {
    lexer: Lexer<R>,
    /// Token handed back by `push_back`, returned by the next `advance`.
    pushed: Option<Token>,
}

impl<R: Read> Parser<R> {
    pub fn new(lexer: Lexer<R>) -> Self {
        Parser {
            lexer,
            pushed: None,
        }
    }

    /// Parse a whole program.
    ///
    /// Returns `Ok(None)` for a program with no statements.
    pub fn parse_program(mut self) -> Result<Option<Node>, ParseError> {
        self.program()
    }

    /// Take the next token.
    fn advance(&mut self) -> Token {
        match self.pushed.take() {
            Some(token) => token,
            None => self.lexer.next_token(),
        }
    }

    /// Return `token` so the next `advance` yields it again.
    fn push_back(&mut self, token: Token) {
        debug_assert!(self.pushed.is_none(), "only one token of pushback");
        self.pushed = Some(token);
    }

    /// Take the next token, which must have the given kind.
    fn expect(
        &mut self,
        kind: TokenKind,
        otherwise: fn(String) -> ParseErrorKind,
    ) -> Result<Token, ParseError> {
        let token = self.advance();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.unexpected(&token, otherwise))
        }
    }

    /// Build the error for an unacceptable token.
    ///
    /// `Err` tokens always report the lexical error behind them; anything
    /// else reports `otherwise`, given the rendered token.
    fn unexpected(&self, token: &Token, otherwise: fn(String) -> ParseErrorKind) -> ParseError {
        let kind = match (token.kind, self.lexer.error()) {
            (TokenKind::Err, Some(error)) => ParseErrorKind::Lexical(error.clone()),
            _ => otherwise(describe(token)),
        };
        ParseError::new(token.line, kind)
    }
}

/// How a token is named in "found ..." messages.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Done => "end of input".to_owned(),
        _ => token.to_string(),
    }
}

/// Parse in-memory source text.
pub fn parse(source: &str) -> Result<Option<Node>, ParseError> {
    Parser::new(Lexer::from_source(source)).parse_program()
}

/// Parse a program read from `reader`.
pub fn parse_reader<R: Read>(reader: R) -> Result<Option<Node>, ParseError> {
    Parser::new(Lexer::new(CharStream::buffered(reader))).parse_program()
}
