//! The scanner that produces tokens from source text.

use tracing::trace;

use super::{Span, Token, TokenKind};
use crate::error::LexError;

/// A scanner that tokenizes Comet source code.
///
/// The scanner is pull-based: each call to [`Scanner::next_token`] classifies
/// exactly one token at the current cursor, or reports end of input.
/// Constructing a scanner replaces all prior state, so every parse call owns
/// a fresh cursor over its own buffer.
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
        }
    }

    /// Returns the next token from the source, or `Ok(None)` at end of input.
    ///
    /// Whitespace and comments are consumed silently and never emitted;
    /// the scan simply retries at the new cursor position. A character that
    /// matches no token pattern is a [`LexError`] carrying the character and
    /// its byte offset.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace_and_comments()?;

        let start = self.current_pos;

        let Some((pos, ch)) = self.advance() else {
            return Ok(None);
        };

        let kind = match ch {
            // Single-character structural tokens
            ';' => TokenKind::Semicolon,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,

            // Integer literals
            '0'..='9' => self.scan_number(),

            // String literals, quotes retained in the token value
            '"' | '\'' => self.scan_string(ch, pos)?,

            // Additive operators
            '+' | '-' => TokenKind::AdditiveOperator,

            _ => {
                return Err(LexError {
                    character: ch,
                    position: pos,
                });
            }
        };

        let span = Span::new(start, self.current_pos);
        let value = self.source[span.start..span.end].to_string();
        trace!(?kind, start = span.start, end = span.end, "scanned token");
        Ok(Some(Token::new(kind, value, span)))
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.current_pos = pos + ch.len_utf8();
        }
        result
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, ch)| ch)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') => {
                    match self.peek_next() {
                        Some('/') => {
                            // Single-line comment: skip until end of line
                            self.advance();
                            self.advance();
                            while let Some(ch) = self.peek() {
                                if ch == '\n' || ch == '\r' {
                                    break;
                                }
                                self.advance();
                            }
                        }
                        Some('*') => {
                            // Multi-line comment: skip until the first */.
                            // An unterminated comment must not loop forever;
                            // it is reported against the opening slash.
                            let start = self.current_pos;
                            self.advance();
                            self.advance();
                            let mut prev = ' ';
                            loop {
                                let Some((_, ch)) = self.advance() else {
                                    return Err(LexError {
                                        character: '/',
                                        position: start,
                                    });
                                };
                                if prev == '*' && ch == '/' {
                                    break;
                                }
                                prev = ch;
                            }
                        }
                        // A lone slash is not a token in Comet; leave it for
                        // next_token to report
                        _ => break,
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn scan_number(&mut self) -> TokenKind {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Number
    }

    fn scan_string(&mut self, quote: char, start: usize) -> Result<TokenKind, LexError> {
        loop {
            match self.advance() {
                Some((_, ch)) if ch == quote => return Ok(TokenKind::String),
                Some(_) => {}
                None => {
                    // Unterminated string: reported against the opening quote
                    return Err(LexError {
                        character: quote,
                        position: start,
                    });
                }
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
