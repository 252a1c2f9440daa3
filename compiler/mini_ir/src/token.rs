//! Token types for the mini lexer.
//!
//! A token is a `(kind, lexeme, line)` triple. Tokens are produced one at a
//! time by the lexer and consumed immediately by the parser; they are never
//! mutated after construction.

use std::fmt;

/// Token kinds for mini.
///
/// The set is closed: keywords, identifiers, literals, operators,
/// punctuation, and the two sentinels `Err` and `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    If,
    Then,
    Print,
    True,
    False,

    // Identifiers & Literals
    Ident,
    IConst,
    SConst,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Eq,
    NEq,
    Lt,
    LEq,
    Gt,
    GEq,
    LogicAnd,
    LogicOr,

    // Punctuation
    LParen,
    RParen,
    Sc,

    // Sentinels
    /// Lexical error; the lexeme holds the offending text or a diagnostic.
    Err,
    /// End of input.
    Done,
}

impl TokenKind {
    /// Resolve a scanned word to its keyword kind, if it is reserved.
    ///
    /// Matching is case-sensitive: `if` is a keyword, `If` is an identifier.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "if" => Some(TokenKind::If),
            "then" => Some(TokenKind::Then),
            "print" => Some(TokenKind::Print),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }

    /// Upper-case name used in diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Print => "PRINT",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Ident => "IDENT",
            TokenKind::IConst => "ICONST",
            TokenKind::SConst => "SCONST",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::NEq => "NEQ",
            TokenKind::Lt => "LT",
            TokenKind::LEq => "LEQ",
            TokenKind::Gt => "GT",
            TokenKind::GEq => "GEQ",
            TokenKind::LogicAnd => "LOGICAND",
            TokenKind::LogicOr => "LOGICOR",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Sc => "SC",
            TokenKind::Err => "ERR",
            TokenKind::Done => "DONE",
        }
    }

    /// Whether the rendered form of this kind includes the lexeme.
    #[inline]
    pub fn shows_lexeme(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::IConst | TokenKind::SConst | TokenKind::Err
        )
    }

    /// Whether this kind ends a token stream.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Done | TokenKind::Err)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token with the line it was scanned on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

/// Renders as the kind name, with `(lexeme)` appended for identifiers,
/// literals, and errors: `IDENT(x)`, `ICONST(-5)`, `SC`, `DONE`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        if self.kind.shows_lexeme() {
            write!(f, "({})", self.lexeme)?;
        }
        Ok(())
    }
}
