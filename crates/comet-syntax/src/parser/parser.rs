//! The main parser implementation.

use tracing::debug;

use crate::ast::{BinaryOperator, Expression, Program, Statement};
use crate::error::ParseError;
use crate::lexer::{Scanner, Token, TokenKind};

/// A recursive descent parser for Comet.
///
/// The parser keeps exactly one token of lookahead, primed before the first
/// grammar rule runs and refreshed every time a token is consumed. Grammar
/// rules inspect the lookahead kind to decide which rule applies and call
/// `eat` to commit; there is no backtracking and no multi-token lookahead
/// anywhere in the grammar.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    lookahead: Option<Token>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            lookahead: None,
        }
    }

    /// Parses the source code into a [`Program`] AST node.
    ///
    /// # Errors
    ///
    /// The first lexical or grammatical violation aborts the parse; there is
    /// no recovery and no partial tree.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        self.lookahead = self.scanner.next_token()?;

        let body = self.statement_list(None)?;
        let program = Program { body };
        debug!(statements = program.body.len(), "parsed program");
        Ok(program)
    }

    /// StatementList := Statement* while the lookahead exists and is not
    /// the stop kind. The program root passes no stop kind and runs until
    /// the input is exhausted; blocks stop at `}`.
    fn statement_list(&mut self, stop: Option<TokenKind>) -> Result<Vec<Statement>, ParseError> {
        let mut body = Vec::new();

        while let Some(kind) = self.lookahead_kind() {
            if stop == Some(kind) {
                break;
            }
            body.push(self.statement()?);
        }

        Ok(body)
    }

    /// Statement := EmptyStatement | BlockStatement | ExpressionStatement
    fn statement(&mut self) -> Result<Statement, ParseError> {
        match self.lookahead_kind() {
            Some(TokenKind::Semicolon) => self.empty_statement(),
            Some(TokenKind::LeftBrace) => self.block_statement(),
            _ => self.expression_statement(),
        }
    }

    /// EmptyStatement := ';'
    fn empty_statement(&mut self) -> Result<Statement, ParseError> {
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::EmptyStatement)
    }

    /// BlockStatement := '{' StatementList('}') '}'
    fn block_statement(&mut self) -> Result<Statement, ParseError> {
        self.eat(TokenKind::LeftBrace)?;
        let body = self.statement_list(Some(TokenKind::RightBrace))?;
        self.eat(TokenKind::RightBrace)?;
        Ok(Statement::BlockStatement { body })
    }

    /// ExpressionStatement := Expression ';'
    fn expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expression = self.expression()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::ExpressionStatement { expression })
    }

    /// Expression := AddExpression
    fn expression(&mut self) -> Result<Expression, ParseError> {
        self.additive_expression()
    }

    /// AddExpression := Literal (('+'|'-') Literal)*
    ///
    /// Chains are left-associative: each operator/operand pair wraps the
    /// previously built expression as its new left operand, so `a+b-c`
    /// parses as `(a+b)-c`.
    fn additive_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.literal()?;

        while self.lookahead_kind() == Some(TokenKind::AdditiveOperator) {
            let token = self.eat(TokenKind::AdditiveOperator)?;
            let operator = if token.value == "+" {
                BinaryOperator::Plus
            } else {
                BinaryOperator::Minus
            };
            let right = self.literal()?;
            left = Expression::BinaryExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Literal := Number | String
    fn literal(&mut self) -> Result<Expression, ParseError> {
        match self.lookahead_kind() {
            Some(TokenKind::Number) => self.number_literal(),
            Some(TokenKind::String) => self.string_literal(),
            // Reported against the first alternative of the rule
            _ => Err(self.unexpected(TokenKind::Number)),
        }
    }

    fn number_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.eat(TokenKind::Number)?;
        let value = match token.value.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                return Err(ParseError::InvalidNumber {
                    literal: token.value,
                });
            }
        };
        Ok(Expression::NumberLiteral { value })
    }

    fn string_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.eat(TokenKind::String)?;
        // Undo the quote-inclusive token value
        let value = token.value[1..token.value.len() - 1].to_string();
        Ok(Expression::StringLiteral { value })
    }

    // Helper methods

    fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// The single consumption primitive: fails if the lookahead is missing
    /// or of the wrong kind; on success returns the consumed token and
    /// refreshes the lookahead from the scanner.
    fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let Some(token) = self.lookahead.take() else {
            return Err(ParseError::UnexpectedEndOfInput { expected });
        };

        if token.kind != expected {
            return Err(ParseError::UnexpectedToken {
                actual: token.value,
                expected,
            });
        }

        self.lookahead = self.scanner.next_token()?;
        Ok(token)
    }

    fn unexpected(&mut self, expected: TokenKind) -> ParseError {
        match self.lookahead.take() {
            Some(token) => ParseError::UnexpectedToken {
                actual: token.value,
                expected,
            },
            None => ParseError::UnexpectedEndOfInput { expected },
        }
    }
}
