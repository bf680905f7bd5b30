//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! Comet has exactly two literal token kinds: numbers and strings.
//!
//! ## Number Literals
//!
//! ```text
//! 42        -> Number, value "42"
//! 007       -> Number, value "007" (digit string is kept uncoerced)
//! ```
//!
//! Method: `scan_number`
//!
//! A number is one or more decimal digits. Fractional, exponent and signed
//! forms are not part of the grammar; `-1` scans as an additive operator
//! followed by a number.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! ### Quote Styles
//!
//! ```text
//! 'single'  -> String, value "'single'"
//! "double"  -> String, value "\"double\""
//! ```
//!
//! The token value retains the surrounding quote characters; the parser
//! strips them when it builds a `StringLiteral` node. A double-quoted run
//! may not embed a double quote, a single-quoted run may not embed a single
//! quote, and there are no escape sequences.
//!
//! An unterminated string is a `LexError` reported against the opening
//! quote character.

// This module serves as documentation. The actual implementation is in scanner.rs.
