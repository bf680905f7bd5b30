//! Structural token, operator, whitespace and comment scanning documentation.
//!
//! This module documents the non-literal patterns in `scanner.rs`.
//!
//! ## Pattern Priority
//!
//! The scanner tries patterns in a fixed order, always anchored at the
//! cursor; the first match wins. Order encodes precedence, not longest
//! match:
//!
//! | Priority | Pattern | Result |
//! |----------|---------------------------|--------------------------|
//! | 1 | whitespace run | consumed, rescan |
//! | 2 | `//` to end of line | consumed, rescan |
//! | 3 | `/*` to the first `*/` | consumed, rescan |
//! | 4 | `;` `{` `}` | structural token |
//! | 5 | decimal digits | `Number` |
//! | 6 | `'...'` or `"..."` | `String` |
//! | 7 | `+` `-` | `AdditiveOperator` |
//!
//! Anything else is a `LexError` carrying the character and its byte
//! offset.
//!
//! ## Comments
//!
//! Comments and whitespace are a scanning-phase no-op: the cursor advances
//! and the scan retries, so no token is ever emitted for them. Block
//! comments are non-greedy and end at the first `*/`; a block comment with
//! no closing marker is a `LexError` against its opening `/` rather than an
//! endless scan.
//!
//! ## Operators
//!
//! Comet has a single operator token kind, `AdditiveOperator`, whose value
//! distinguishes `+` from `-`. There is no division token, so a slash that
//! does not open a comment is a `LexError`.

// This module serves as documentation. The actual implementation is in scanner.rs.
