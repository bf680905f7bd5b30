//! Diagnostic types for the Comet front end.
//!
//! Two failure channels exist: [`LexError`] when the scanner cannot classify
//! a character, and [`ParseError`] when the token stream violates the
//! grammar. Both are terminal for the current parse call; the first failure
//! is the only one reported and no partial tree is returned.

use thiserror::Error;

use crate::lexer::TokenKind;

/// The scanner found a character that matches no token pattern.
///
/// Carries the offending character and its byte offset in the source
/// buffer. The parser passes this through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unexpected character `{character}` at position {position}")]
pub struct LexError {
    /// The character that could not be classified.
    pub character: char,
    /// Byte offset of the character in the source buffer.
    pub position: usize,
}

/// The token stream violates the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Scanning failed; the lex error is surfaced unchanged.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token was required but the input was exhausted.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        /// The token kind the current grammar rule required.
        expected: TokenKind,
    },

    /// The lookahead token does not fit the current grammar rule.
    #[error("unexpected token `{actual}`, expected {expected}")]
    UnexpectedToken {
        /// Raw text of the token that was found.
        actual: String,
        /// The token kind the current grammar rule required.
        expected: TokenKind,
    },

    /// A number literal does not fit in a 64-bit signed integer.
    #[error("number literal `{literal}` is out of range")]
    InvalidNumber {
        /// The digit string as it appeared in the source.
        literal: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let err = LexError {
            character: '@',
            position: 7,
        };
        assert_eq!(err.to_string(), "unexpected character `@` at position 7");
    }

    #[test]
    fn test_lex_error_passthrough_display() {
        let lex = LexError {
            character: '#',
            position: 0,
        };
        let parse: ParseError = lex.into();
        assert_eq!(parse.to_string(), lex.to_string());
    }

    #[test]
    fn test_unexpected_end_of_input_display() {
        let err = ParseError::UnexpectedEndOfInput {
            expected: TokenKind::Semicolon,
        };
        assert_eq!(err.to_string(), "unexpected end of input, expected `;`");
    }

    #[test]
    fn test_unexpected_token_display() {
        let err = ParseError::UnexpectedToken {
            actual: "}".to_string(),
            expected: TokenKind::Number,
        };
        assert_eq!(err.to_string(), "unexpected token `}`, expected number");
    }
}
