//! Lexical analysis (tokenization) for Comet source code.
//!
//! The scanner transforms source text into a stream of tokens that the
//! parser consumes one lookahead at a time. Tokens are produced on demand,
//! not in a batch pass.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Span` definitions
//!
//! ## Documentation Submodules
//!
//! - `literals` - Number and string literal scanning
//! - `operators` - Structural tokens, operators, whitespace and comments
//!
//! ## Usage
//!
//! ```rust
//! use comet_syntax::lexer::Scanner;
//!
//! let mut scanner = Scanner::new("123 + 456;");
//!
//! while let Some(token) = scanner.next_token().expect("source is well formed") {
//!     println!("{:?} {}", token.kind, token.value);
//! }
//! ```

mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};
