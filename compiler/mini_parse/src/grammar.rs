//! Grammar productions.
//!
//! ```text
//! Prog        := Slist
//! Slist       := Stmt SC { Stmt SC }
//! Stmt        := IfStmt | PrintStmt | Expr
//! IfStmt      := IF Expr THEN Stmt
//! PrintStmt   := PRINT Expr
//! Expr        := LogicExpr [ ASSIGN Expr ]
//! LogicExpr   := CompareExpr { (LOGICAND | LOGICOR) CompareExpr }
//! CompareExpr := AddExpr { (EQ | NEQ | GT | GEQ | LT | LEQ) AddExpr }
//! AddExpr     := MulExpr { (PLUS | MINUS) MulExpr }
//! MulExpr     := Factor { (STAR | SLASH) Factor }
//! Factor      := MINUS Primary | Primary
//! Primary     := IDENT | ICONST | SCONST | TRUE | FALSE | LPAREN Expr RPAREN
//! ```

use std::io::Read;

use mini_ir::{BinaryOp, Node, TokenKind};
use mini_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

/// One rung of the binary precedence ladder.
type Level<R> = fn(&mut Parser<R>) -> Result<Node, ParseError>;

impl<R: Read> Parser<R> {
    /// `Prog := Slist`, or nothing at all.
    pub(crate) fn program(&mut self) -> Result<Option<Node>, ParseError> {
        let mut statements = Vec::new();
        loop {
            let token = self.advance();
            if token.kind == TokenKind::Done {
                break;
            }
            self.push_back(token);

            let statement = self.parse_statement()?;
            self.expect(TokenKind::Sc, |found| ParseErrorKind::MissingSemicolon { found })?;
            statements.push(statement);
        }

        tracing::debug!(statements = statements.len(), "parsed program");

        // Chain from the back so the list leans right without recursion.
        let mut list = None;
        for statement in statements.into_iter().rev() {
            list = Some(Node::statement_list(statement, list));
        }
        Ok(list)
    }

    /// `Stmt := IfStmt | PrintStmt | Expr`
    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Node, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::If => {
                let condition = self.parse_expr()?;
                self.expect(TokenKind::Then, |found| ParseErrorKind::MissingThen { found })?;
                let body = self.parse_statement()?;
                Ok(Node::if_statement(token.line, condition, body))
            }
            TokenKind::Print => {
                let expr = self.parse_expr()?;
                Ok(Node::print(token.line, expr))
            }
            kind if starts_expression(kind) => {
                self.push_back(token);
                self.parse_expr()
            }
            _ => Err(self.unexpected(&token, |found| ParseErrorKind::UnexpectedToken { found })),
        }
    }

    /// `Expr := LogicExpr [ ASSIGN Expr ]`
    fn parse_expr(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Node, ParseError> {
        let target = self.parse_logic()?;

        let token = self.advance();
        if token.kind == TokenKind::Assign {
            let value = self.parse_expr()?;
            return Ok(Node::assignment(token.line, target, value));
        }
        self.push_back(token);
        Ok(target)
    }

    fn parse_logic(&mut self) -> Result<Node, ParseError> {
        self.parse_binary_level(Self::parse_compare, logic_op)
    }

    fn parse_compare(&mut self) -> Result<Node, ParseError> {
        self.parse_binary_level(Self::parse_additive, compare_op)
    }

    fn parse_additive(&mut self) -> Result<Node, ParseError> {
        self.parse_binary_level(Self::parse_multiplicative, additive_op)
    }

    fn parse_multiplicative(&mut self) -> Result<Node, ParseError> {
        self.parse_binary_level(Self::parse_factor, multiplicative_op)
    }

    /// Left-associative loop shared by every binary level.
    ///
    /// Any token that is not one of this level's operators is pushed back
    /// for the caller, including `Err` tokens.
    fn parse_binary_level(
        &mut self,
        next: Level<R>,
        op_for: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<Node, ParseError> {
        let mut left = next(self)?;
        loop {
            let token = self.advance();
            let Some(op) = op_for(token.kind) else {
                self.push_back(token);
                return Ok(left);
            };
            let right = next(self)?;
            left = Node::binary(token.line, op, left, right);
        }
    }

    /// `Factor := MINUS Primary | Primary`
    ///
    /// Unary minus becomes `-1 * operand`.
    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        let token = self.advance();
        if token.kind == TokenKind::Minus {
            let operand = self.parse_primary()?;
            return Ok(Node::binary(
                token.line,
                BinaryOp::Times,
                Node::int(token.line, -1),
                operand,
            ));
        }
        self.push_back(token);
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let token = self.advance();
        let line = token.line;
        match token.kind {
            TokenKind::Ident => Ok(Node::ident(line, token.lexeme)),
            TokenKind::SConst => Ok(Node::string(line, token.lexeme)),
            TokenKind::True => Ok(Node::bool(line, true)),
            TokenKind::False => Ok(Node::bool(line, false)),
            TokenKind::IConst => match token.lexeme.parse::<i64>() {
                Ok(value) => Ok(Node::int(line, value)),
                Err(_) => Err(ParseError::new(
                    line,
                    ParseErrorKind::IntegerOutOfRange {
                        text: token.lexeme,
                    },
                )),
            },
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, |found| ParseErrorKind::MissingRightParen {
                    found,
                })?;
                Ok(inner)
            }
            _ => Err(self.unexpected(&token, |found| ParseErrorKind::ExpectedExpression { found })),
        }
    }
}

/// Tokens that can begin an expression statement.
fn starts_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident
            | TokenKind::IConst
            | TokenKind::SConst
            | TokenKind::True
            | TokenKind::False
            | TokenKind::LParen
            | TokenKind::Minus
    )
}

fn logic_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::LogicAnd => Some(BinaryOp::LogicAnd),
        TokenKind::LogicOr => Some(BinaryOp::LogicOr),
        _ => None,
    }
}

fn compare_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NEq => Some(BinaryOp::NEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GEq => Some(BinaryOp::GEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LEq => Some(BinaryOp::LEq),
        _ => None,
    }
}

fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Plus),
        TokenKind::Minus => Some(BinaryOp::Minus),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Times),
        TokenKind::Slash => Some(BinaryOp::Divide),
        _ => None,
    }
}
