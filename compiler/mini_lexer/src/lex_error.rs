//! Lexical error kinds.
//!
//! The token stream reports these as `Err` tokens carrying [`LexError::lexeme`];
//! the typed value is kept alongside for diagnostics.

use thiserror::Error;

/// What went wrong while scanning a token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A newline or end of input arrived before the closing `"`.
    #[error("unterminated string literal \"{text}")]
    UnterminatedString { text: String },

    /// A digit run ran straight into a letter, e.g. `12ab`.
    #[error("malformed integer literal {text}")]
    MalformedInteger { text: String },

    /// `&`, `|` or `!` without the second character of its operator.
    #[error("unexpected `{found}`, expected `{expected}`")]
    LoneOperator {
        found: char,
        expected: &'static str,
    },

    /// A character that starts no token.
    #[error("unrecognized character `{found}`")]
    UnexpectedChar { found: char },

    /// The underlying reader failed for a reason other than end of input.
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl LexError {
    /// Text carried by the corresponding `Err` token.
    pub fn lexeme(&self) -> String {
        match self {
            LexError::UnterminatedString { text } => format!("\"{text}"),
            LexError::MalformedInteger { text } => text.clone(),
            LexError::LoneOperator { found, .. } | LexError::UnexpectedChar { found } => {
                found.to_string()
            }
            LexError::Io { .. } => self.to_string(),
        }
    }
}
