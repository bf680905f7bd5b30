//! Expression parsing utilities and documentation.
//!
//! This module documents the expression parsing logic found in `parser.rs`.
//! Expression parsing uses recursive descent; the grammar currently has a
//! single precedence level.
//!
//! ## Precedence Table (lowest to highest)
//!
//! | Precedence | Operators | Method |
//! |------------|-----------|-----------------------|
//! | 1 | `+` `-` | `additive_expression` |
//! | 2 | primary | `literal` |
//!
//! ## Grammar
//!
//! ```text
//! Expression :
//!     AddExpression
//!
//! AddExpression :
//!     Literal
//!     AddExpression AdditiveOperator Literal
//!
//! Literal :
//!     Number
//!     String
//! ```
//!
//! ## Associativity
//!
//! Additive chains are left-associative. The parser builds them
//! iteratively: after each operator/operand pair, the expression built so
//! far becomes the left operand of a new `BinaryExpression`, so `a+b-c`
//! yields `(a+b)-c`.
//!
//! ## Literals
//!
//! Literal resolution is a one-token dispatch on the lookahead kind.
//! Number tokens carry their uncoerced digit string and are converted to
//! `i64` here; string tokens carry their quotes and are stripped of
//! exactly the first and last character here.

// This module serves as documentation. The actual implementation is in parser.rs.

#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOperator, Expression, Statement};
    use crate::parser::Parser;

    fn parse_expr(src: &str) -> Expression {
        let source = format!("{};", src);
        let mut parser = Parser::new(&source);
        let program = parser.parse().expect("should parse");
        match program.body.into_iter().next() {
            Some(Statement::ExpressionStatement { expression }) => expression,
            other => panic!("expected an expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_expr("42"), Expression::NumberLiteral { value: 42 });
    }

    #[test]
    fn test_parse_number_with_leading_zeros() {
        // The token keeps "007"; decimal conversion happens here
        assert_eq!(parse_expr("007"), Expression::NumberLiteral { value: 7 });
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(
            parse_expr("'hello'"),
            Expression::StringLiteral {
                value: "hello".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(
            parse_expr("\"\""),
            Expression::StringLiteral {
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_binary_add() {
        let expr = parse_expr("1 + 2");
        assert!(matches!(
            expr,
            Expression::BinaryExpression {
                operator: BinaryOperator::Plus,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_binary_subtract() {
        let expr = parse_expr("5 - 3");
        assert!(matches!(
            expr,
            Expression::BinaryExpression {
                operator: BinaryOperator::Minus,
                ..
            }
        ));
    }

    #[test]
    fn test_long_chain_leans_left() {
        // 1+2+3+4 groups as ((1+2)+3)+4
        let mut expr = parse_expr("1+2+3+4");
        let mut rights = Vec::new();
        while let Expression::BinaryExpression { left, right, .. } = expr {
            rights.push(*right);
            expr = *left;
        }
        assert_eq!(expr, Expression::NumberLiteral { value: 1 });
        assert_eq!(
            rights,
            vec![
                Expression::NumberLiteral { value: 4 },
                Expression::NumberLiteral { value: 3 },
                Expression::NumberLiteral { value: 2 },
            ]
        );
    }

    #[test]
    fn test_strings_chain_like_numbers() {
        let expr = parse_expr("'a' + 'b' - 'c'");
        let Expression::BinaryExpression {
            operator, left, ..
        } = expr
        else {
            panic!("expected a binary expression");
        };
        assert_eq!(operator, BinaryOperator::Minus);
        assert!(matches!(*left, Expression::BinaryExpression { .. }));
    }
}
