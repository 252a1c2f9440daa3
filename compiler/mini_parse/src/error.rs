//! Parse error types.
//!
//! Parsing stops at the first error. The error carries the line of the
//! token that could not be accepted and renders as `<line>: <message>`.

use mini_lexer::LexError;
use thiserror::Error;

/// A parse failure at a source line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{line}: {kind}")]
pub struct ParseError {
    pub line: u32,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: u32, kind: ParseErrorKind) -> Self {
        ParseError { line, kind }
    }
}

/// What the parser expected and did not get.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The lexer produced an `Err` token.
    #[error("unrecognized input: {0}")]
    Lexical(#[from] LexError),

    /// A statement cannot start with this token.
    #[error("unexpected {found} at start of statement")]
    UnexpectedToken { found: String },

    #[error("missing `;` after statement, found {found}")]
    MissingSemicolon { found: String },

    #[error("missing `then` in if statement, found {found}")]
    MissingThen { found: String },

    #[error("missing `)`, found {found}")]
    MissingRightParen { found: String },

    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: String },

    #[error("integer literal {text} is out of range")]
    IntegerOutOfRange { text: String },
}
