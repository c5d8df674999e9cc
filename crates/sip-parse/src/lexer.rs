// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character-level cursor over one header span.
//!
//! Lookahead never moves the cursor; only `consume` and the `match_*`
//! family advance it. A `consume(k)` after a successful `look_ahead(k - 1)`
//! takes exactly the characters that were inspected. Positions are byte
//! offsets into the buffer.

use sip_core::is_token_char;
use smol_str::SmolStr;

use crate::error::ParseErrorKind;

pub type LexResult<T> = Result<T, ParseErrorKind>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of RFC 3261 token characters
    Id,
    /// One specific character
    Char(char),
    /// A quoted-string; the token value is unescaped
    QuotedString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: SmolStr,
    position: usize,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> SmolStr {
        self.value
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    buffer: &'a str,
    position: usize,
    last: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self {
            buffer,
            position: 0,
            last: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// Character `k` places ahead of the cursor.
    pub fn look_ahead(&self, k: usize) -> LexResult<char> {
        self.rest()
            .chars()
            .nth(k)
            .ok_or(ParseErrorKind::EndOfInput {
                position: self.buffer.len(),
            })
    }

    /// Like [`Lexer::look_ahead`] with end of input mapped to `None`.
    pub fn peek(&self, k: usize) -> Option<char> {
        self.rest().chars().nth(k)
    }

    /// Advances past `k` characters.
    pub fn consume(&mut self, k: usize) -> LexResult<()> {
        let rest = self.rest();
        let mut advance = 0;
        let mut chars = rest.char_indices();
        for _ in 0..k {
            match chars.next() {
                Some((idx, ch)) => advance = idx + ch.len_utf8(),
                None => {
                    return Err(ParseErrorKind::EndOfInput {
                        position: self.buffer.len(),
                    })
                }
            }
        }
        self.position += advance;
        Ok(())
    }

    /// Consumes the next token if it is of the `expected` kind.
    pub fn match_token(&mut self, expected: TokenKind) -> LexResult<Token> {
        match expected {
            TokenKind::Id => self.match_id(),
            TokenKind::Char(ch) => self.match_char(ch),
            TokenKind::QuotedString => {
                let position = self.position;
                let value = self.quoted_string()?;
                Ok(self.remember(Token {
                    kind: TokenKind::QuotedString,
                    value,
                    position,
                }))
            }
        }
    }

    /// Consumes `expected` or fails with `UnexpectedToken`.
    pub fn match_char(&mut self, expected: char) -> LexResult<Token> {
        if self.peek(0) != Some(expected) {
            return Err(self.unexpected(&format!("'{}'", expected)));
        }
        let position = self.position;
        self.position += expected.len_utf8();
        Ok(self.remember(Token {
            kind: TokenKind::Char(expected),
            value: SmolStr::new(expected.encode_utf8(&mut [0; 4])),
            position,
        }))
    }

    /// Consumes a non-empty run of token characters.
    pub fn match_id(&mut self) -> LexResult<Token> {
        let len = self.id_len();
        if len == 0 {
            return Err(self.unexpected("identifier"));
        }
        let position = self.position;
        let value = SmolStr::new(&self.rest()[..len]);
        self.position += len;
        Ok(self.remember(Token {
            kind: TokenKind::Id,
            value,
            position,
        }))
    }

    /// Extracts the next identifier, advancing past it.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.match_id()
    }

    /// The identifier at the cursor, without consuming it.
    pub fn peek_id(&self) -> Option<&'a str> {
        let len = self.id_len();
        (len > 0).then(|| &self.rest()[..len])
    }

    /// Last token consumed by a `match_*` call.
    pub fn last_token(&self) -> Option<&Token> {
        self.last.as_ref()
    }

    /// Skips spaces and horizontal tabs, returning how many were skipped.
    pub fn sp_or_ht(&mut self) -> usize {
        let skipped = self
            .rest()
            .bytes()
            .take_while(|b| *b == b' ' || *b == b'\t')
            .count();
        self.position += skipped;
        skipped
    }

    /// Consumes a quoted-string and returns its unescaped contents.
    ///
    /// A backslash escapes the following character (RFC 3261 quoted-pair).
    /// The string must close on the current line; CR and LF are never part
    /// of the contents, escaped or not.
    pub fn quoted_string(&mut self) -> LexResult<SmolStr> {
        let start = self.position;
        if self.peek(0) != Some('"') {
            return Err(self.unexpected("'\"'"));
        }
        let rest = self.rest();
        let mut contents = String::new();
        let mut chars = rest.char_indices().skip(1);
        while let Some((idx, ch)) = chars.next() {
            match ch {
                '\r' | '\n' => break,
                '\\' => match chars.next() {
                    Some((_, '\r' | '\n')) | None => break,
                    Some((_, escaped)) => contents.push(escaped),
                },
                '"' => {
                    self.position += idx + 1;
                    return Ok(SmolStr::new(contents));
                }
                _ => contents.push(ch),
            }
        }
        Err(ParseErrorKind::UnterminatedQuote { position: start })
    }

    /// `true` at `\r`, `\n` or end of input.
    pub fn is_end_of_line(&self) -> bool {
        matches!(self.peek(0), None | Some('\r') | Some('\n'))
    }

    /// Consumes one line terminator (`\r\n`, `\n` or `\r`) if present.
    pub fn end_of_line(&mut self) -> bool {
        let rest = self.rest();
        let len = if rest.starts_with("\r\n") {
            2
        } else if rest.starts_with('\n') || rest.starts_with('\r') {
            1
        } else {
            0
        };
        self.position += len;
        len > 0
    }

    /// Consumes everything up to (not including) the line terminator.
    pub fn take_line(&mut self) -> &'a str {
        let line = self.peek_line();
        self.position += line.len();
        line
    }

    /// Unconsumed input; diagnostic view, does not move the cursor.
    pub fn rest(&self) -> &'a str {
        &self.buffer[self.position..]
    }

    /// Unconsumed input up to the next line terminator.
    pub fn peek_line(&self) -> &'a str {
        let rest = self.rest();
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        &rest[..end]
    }

    fn id_len(&self) -> usize {
        let rest = self.rest();
        rest.find(|c: char| !is_token_char(c)).unwrap_or(rest.len())
    }

    fn remember(&mut self, token: Token) -> Token {
        self.last = Some(token.clone());
        token
    }

    fn unexpected(&self, expected: &str) -> ParseErrorKind {
        let found = match self.peek(0) {
            Some(ch) => SmolStr::new(format!("{:?}", ch)),
            None => SmolStr::new_inline("end of input"),
        };
        ParseErrorKind::UnexpectedToken {
            expected: SmolStr::new(expected),
            found,
            position: self.position,
        }
    }
}
