//! Finite-state token scanner.
//!
//! Each call starts in `Begin` and consumes bytes until a token is complete.
//! States that need to see one byte past the token (identifiers, integers,
//! and the one-or-two character operators) put that byte back before
//! returning.
//!
//! ```text
//! Begin ──letter──► InIdent ──non-alnum──► IDENT / keyword
//!   │──digit──────► InInt ───letter──────► ERR
//!   │──'-'────────► SawMinus ──digit─────► InInt
//!   │──'"'────────► InString ──'"'───────► SCONST   (newline ► ERR)
//!   │──'#'────────► InComment ──newline──► Begin
//!   │──'=' '<' '>' '!' '&' '|' ──► Saw* ──second char?──► two-char op
//!   └──'+' '*' '/' '(' ')' ';'───────────► single-char token
//! ```

use std::io::Read;

use mini_ir::{Token, TokenKind};

use crate::char_stream::CharStream;
use crate::lex_error::LexError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LexState {
    Begin,
    InIdent,
    InInt,
    InString,
    InComment,
    SawMinus,
    SawEq,
    SawLt,
    SawGt,
    SawBang,
    SawAnd,
    SawOr,
}

/// Outcome of one scan, before it is flattened into a `Token`.
enum Scanned {
    Token(TokenKind, Vec<u8>),
    Error(LexError),
}

/// Scan the next token from `stream`.
///
/// `line` is incremented for every newline consumed. Call repeatedly until
/// a token of kind `Done` or `Err` is returned; further calls after `Done`
/// keep returning `Done`.
pub fn next_token<R: Read>(stream: &mut CharStream<R>, line: &mut u32) -> Token {
    let (token, _) = next_token_with_error(stream, line);
    token
}

/// Like [`next_token`], also returning the typed error behind an `Err` token.
fn next_token_with_error<R: Read>(
    stream: &mut CharStream<R>,
    line: &mut u32,
) -> (Token, Option<LexError>) {
    let (token, error) = match scan(stream, line) {
        Scanned::Token(kind, bytes) => (Token::new(kind, lexeme_text(kind, &bytes), *line), None),
        Scanned::Error(error) => (Token::new(TokenKind::Err, error.lexeme(), *line), Some(error)),
    };
    tracing::trace!(token = %token, line = token.line, "scanned");
    (token, error)
}

fn lexeme_text(kind: TokenKind, bytes: &[u8]) -> String {
    match kind {
        // String contents may hold any UTF-8; everything else is ASCII.
        TokenKind::SConst => String::from_utf8_lossy(bytes).into_owned(),
        _ => bytes.iter().copied().map(char::from).collect(),
    }
}

fn scan<R: Read>(stream: &mut CharStream<R>, line: &mut u32) -> Scanned {
    let mut state = LexState::Begin;
    let mut lexeme: Vec<u8> = Vec::new();

    loop {
        let ch = match stream.next_byte() {
            Ok(Some(ch)) => ch,
            Ok(None) => return finish_at_eof(state, lexeme),
            Err(e) => {
                return Scanned::Error(LexError::Io {
                    message: e.to_string(),
                })
            }
        };

        if ch == b'\n' {
            *line += 1;
        }

        match state {
            LexState::Begin => {
                if is_space(ch) {
                    continue;
                }
                state = match ch {
                    b'a'..=b'z' | b'A'..=b'Z' => LexState::InIdent,
                    b'0'..=b'9' => LexState::InInt,
                    b'"' => LexState::InString,
                    b'#' => LexState::InComment,
                    b'-' => LexState::SawMinus,
                    b'=' => LexState::SawEq,
                    b'<' => LexState::SawLt,
                    b'>' => LexState::SawGt,
                    b'!' => LexState::SawBang,
                    b'&' => LexState::SawAnd,
                    b'|' => LexState::SawOr,
                    _ => return single(ch),
                };
                // The opening quote is not part of a string's lexeme.
                if state != LexState::InString {
                    lexeme.push(ch);
                }
            }

            LexState::InIdent => {
                if ch.is_ascii_alphanumeric() {
                    lexeme.push(ch);
                } else {
                    put_back(stream, line, ch);
                    return ident_or_keyword(lexeme);
                }
            }

            LexState::InInt => {
                if ch.is_ascii_digit() {
                    lexeme.push(ch);
                } else if ch.is_ascii_alphabetic() {
                    lexeme.push(ch);
                    return Scanned::Error(LexError::MalformedInteger {
                        text: ascii(&lexeme),
                    });
                } else {
                    put_back(stream, line, ch);
                    return Scanned::Token(TokenKind::IConst, lexeme);
                }
            }

            LexState::InString => match ch {
                b'"' => return Scanned::Token(TokenKind::SConst, lexeme),
                b'\n' => {
                    return Scanned::Error(LexError::UnterminatedString {
                        text: String::from_utf8_lossy(&lexeme).into_owned(),
                    })
                }
                _ => lexeme.push(ch),
            },

            LexState::InComment => {
                if ch == b'\n' {
                    state = LexState::Begin;
                    lexeme.clear();
                }
            }

            LexState::SawMinus => {
                if ch.is_ascii_digit() {
                    lexeme.push(ch);
                    state = LexState::InInt;
                } else {
                    put_back(stream, line, ch);
                    return Scanned::Token(TokenKind::Minus, lexeme);
                }
            }

            LexState::SawEq => return pair(stream, line, lexeme, ch, TokenKind::Eq, TokenKind::Assign),
            LexState::SawLt => return pair(stream, line, lexeme, ch, TokenKind::LEq, TokenKind::Lt),
            LexState::SawGt => return pair(stream, line, lexeme, ch, TokenKind::GEq, TokenKind::Gt),

            LexState::SawBang => return required_pair(stream, line, lexeme, ch, b'=', TokenKind::NEq),
            LexState::SawAnd => {
                return required_pair(stream, line, lexeme, ch, b'&', TokenKind::LogicAnd)
            }
            LexState::SawOr => return required_pair(stream, line, lexeme, ch, b'|', TokenKind::LogicOr),
        }
    }
}

/// Resolve a state that was interrupted by end of input.
///
/// A partially scanned token is flushed rather than dropped.
fn finish_at_eof(state: LexState, lexeme: Vec<u8>) -> Scanned {
    match state {
        LexState::Begin | LexState::InComment => Scanned::Token(TokenKind::Done, Vec::new()),
        LexState::InIdent => ident_or_keyword(lexeme),
        LexState::InInt => Scanned::Token(TokenKind::IConst, lexeme),
        LexState::InString => Scanned::Error(LexError::UnterminatedString {
            text: String::from_utf8_lossy(&lexeme).into_owned(),
        }),
        LexState::SawMinus => Scanned::Token(TokenKind::Minus, lexeme),
        LexState::SawEq => Scanned::Token(TokenKind::Assign, lexeme),
        LexState::SawLt => Scanned::Token(TokenKind::Lt, lexeme),
        LexState::SawGt => Scanned::Token(TokenKind::Gt, lexeme),
        LexState::SawBang => lone_operator('!'),
        LexState::SawAnd => lone_operator('&'),
        LexState::SawOr => lone_operator('|'),
    }
}

/// Tokens that are complete after their first and only byte.
fn single(ch: u8) -> Scanned {
    let kind = match ch {
        b'+' => TokenKind::Plus,
        b'*' => TokenKind::Star,
        b'/' => TokenKind::Slash,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b';' => TokenKind::Sc,
        _ => {
            return Scanned::Error(LexError::UnexpectedChar {
                found: char::from(ch),
            })
        }
    };
    Scanned::Token(kind, vec![ch])
}

/// `=`, `<`, `>`: a following `=` makes the two-character operator,
/// anything else is put back and the single-character operator stands.
fn pair<R: Read>(
    stream: &mut CharStream<R>,
    line: &mut u32,
    mut lexeme: Vec<u8>,
    ch: u8,
    double: TokenKind,
    alone: TokenKind,
) -> Scanned {
    if ch == b'=' {
        lexeme.push(ch);
        Scanned::Token(double, lexeme)
    } else {
        put_back(stream, line, ch);
        Scanned::Token(alone, lexeme)
    }
}

/// `!`, `&`, `|`: only valid as the first half of `!=`, `&&`, `||`.
fn required_pair<R: Read>(
    stream: &mut CharStream<R>,
    line: &mut u32,
    mut lexeme: Vec<u8>,
    ch: u8,
    second: u8,
    kind: TokenKind,
) -> Scanned {
    if ch == second {
        lexeme.push(ch);
        Scanned::Token(kind, lexeme)
    } else {
        put_back(stream, line, ch);
        lone_operator(char::from(lexeme[0]))
    }
}

fn lone_operator(found: char) -> Scanned {
    let expected = match found {
        '!' => "!=",
        '&' => "&&",
        _ => "||",
    };
    Scanned::Error(LexError::LoneOperator { found, expected })
}

fn ident_or_keyword(lexeme: Vec<u8>) -> Scanned {
    let kind = TokenKind::keyword(&ascii(&lexeme)).unwrap_or(TokenKind::Ident);
    Scanned::Token(kind, lexeme)
}

/// Un-read `ch`, un-counting it if it was a newline.
fn put_back<R: Read>(stream: &mut CharStream<R>, line: &mut u32, ch: u8) {
    if ch == b'\n' {
        *line -= 1;
    }
    stream.putback(ch);
}

/// Space-class bytes: space, tab, newline, vertical tab, form feed, return.
#[inline]
fn is_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn ascii(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Token iterator over a stream, owning its line counter.
///
/// Yields tokens up to and including the first `Done` or `Err`, then stops.
/// Lines are counted from 1.
pub struct Lexer<R> {
    stream: CharStream<R>,
    line: u32,
    finished: bool,
    error: Option<LexError>,
}

impl<R: Read> Lexer<R> {
    pub fn new(stream: CharStream<R>) -> Self {
        Lexer {
            stream,
            line: 1,
            finished: false,
            error: None,
        }
    }

    /// Current value of the line counter.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The typed error behind the last `Err` token, if one was produced.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Scan the next token regardless of whether the stream already ended.
    ///
    /// Unlike the `Iterator` impl this never returns `None`: after the end
    /// of input it keeps producing `Done`.
    pub fn next_token(&mut self) -> Token {
        let (token, error) = next_token_with_error(&mut self.stream, &mut self.line);
        if error.is_some() {
            self.error = error;
        }
        token
    }
}

impl<'a> Lexer<&'a [u8]> {
    /// Lex in-memory source text.
    pub fn from_source(source: &'a str) -> Self {
        Lexer::new(CharStream::from_source(source))
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind.is_terminal();
        Some(token)
    }
}

/// Tokenize `source` up to and including the terminating `Done` or `Err`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::from_source(source).collect()
}
