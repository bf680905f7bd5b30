//! Abstract Syntax Tree (AST) definitions for Comet.
//!
//! The tree is a closed set of owned nodes: every non-root node is owned
//! exclusively by its parent, and a tree is immutable once the parser
//! returns it. With the `serde` feature enabled, statements and expressions
//! serialize internally tagged by `type`, giving the ESTree-style object
//! shape consumers expect.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A complete Comet program, the root of every parse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Program {
    /// The statements of the program, in source order.
    pub body: Vec<Statement>,
}

/// A Comet statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub enum Statement {
    /// An expression terminated by `;`
    ExpressionStatement {
        /// The expression being evaluated for effect
        expression: Expression,
    },
    /// A `{ ... }` block
    BlockStatement {
        /// The statements of the block, in source order
        body: Vec<Statement>,
    },
    /// A lone `;`
    EmptyStatement,
}

/// A Comet expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(tag = "type"))]
pub enum Expression {
    /// An integer literal such as `123`
    NumberLiteral {
        /// The literal's value, parsed as a decimal integer
        value: i64,
    },
    /// A string literal such as `"hello"`, quotes stripped
    StringLiteral {
        /// The literal's text without the surrounding quotes
        value: String,
    },
    /// A binary additive expression such as `1 + 2`
    BinaryExpression {
        /// The operator joining the operands
        operator: BinaryOperator,
        /// The left operand; operator chains grow leftward
        left: Box<Expression>,
        /// The right operand, always a single literal in a chain
        right: Box<Expression>,
    },
}

/// The binary operators of the additive expression rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BinaryOperator {
    /// `+`
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Plus,
    /// `-`
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Minus,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::Plus => write!(f, "+"),
            BinaryOperator::Minus => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_equality() {
        let a = Expression::NumberLiteral { value: 1 };
        let b = Expression::NumberLiteral { value: 1 };
        let c = Expression::NumberLiteral { value: 2 };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_binary_expression_owns_operands() {
        let expr = Expression::BinaryExpression {
            operator: BinaryOperator::Plus,
            left: Box::new(Expression::NumberLiteral { value: 1 }),
            right: Box::new(Expression::NumberLiteral { value: 2 }),
        };
        let cloned = expr.clone();
        assert_eq!(expr, cloned);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(BinaryOperator::Plus.to_string(), "+");
        assert_eq!(BinaryOperator::Minus.to_string(), "-");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_statements_serialize_tagged() {
        let stmt = Statement::EmptyStatement;
        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "EmptyStatement" }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_operators_serialize_as_symbols() {
        let expr = Expression::BinaryExpression {
            operator: BinaryOperator::Minus,
            left: Box::new(Expression::NumberLiteral { value: 3 }),
            right: Box::new(Expression::NumberLiteral { value: 2 }),
        };
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["operator"], "-");
        assert_eq!(json["type"], "BinaryExpression");
    }
}
