// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grammar-independent recursive-descent utilities.
//!
//! [`ParserCore`] wraps a [`Lexer`] and turns its errors into [`ParseError`]s
//! that carry the innermost active rule name and the unconsumed input.
//! Rules are entered through [`ParserCore::rule`], which scopes the nesting
//! depth to the closure so it unwinds on success and failure alike.

use std::sync::Arc;

use sip_core::{HeaderName, NameValue};
use sip_observe::ParserTrace;
use smol_str::SmolStr;

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{LexResult, Lexer, Token};

pub struct ParserCore<'a> {
    lexer: Lexer<'a>,
    trace: Option<Arc<dyn ParserTrace>>,
    rules: Vec<&'static str>,
}

impl<'a> ParserCore<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self::from_lexer(Lexer::new(buffer))
    }

    /// Shares an existing lexer, e.g. one positioned mid-message.
    pub fn from_lexer(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            trace: None,
            rules: Vec::new(),
        }
    }

    /// Applies the size limit and trace sink of `config`.
    pub fn with_config(buffer: &'a str, config: &ParserConfig) -> Result<Self, ParseError> {
        if buffer.len() > config.max_input_len {
            return Err(ParseError::new(
                "ParserCore.new",
                ParseErrorKind::InputTooLarge {
                    max: config.max_input_len,
                    actual: buffer.len(),
                },
                "",
            ));
        }
        Ok(Self::new(buffer).with_trace(config.trace.clone()))
    }

    pub fn with_trace(mut self, trace: Option<Arc<dyn ParserTrace>>) -> Self {
        self.trace = trace;
        self
    }

    pub fn lexer(&self) -> &Lexer<'a> {
        &self.lexer
    }

    pub fn lexer_mut(&mut self) -> &mut Lexer<'a> {
        &mut self.lexer
    }

    pub fn into_lexer(self) -> Lexer<'a> {
        self.lexer
    }

    /// Current rule nesting depth.
    pub fn depth(&self) -> usize {
        self.rules.len()
    }

    /// Runs `body` as the grammar rule `name`.
    pub fn rule<T>(
        &mut self,
        name: &'static str,
        body: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if let Some(trace) = &self.trace {
            trace.enter(self.rules.len(), name, self.lexer.rest());
        }
        self.rules.push(name);
        let result = body(self);
        self.rules.pop();
        if let Some(trace) = &self.trace {
            trace.leave(self.rules.len(), name);
        }
        result
    }

    /// Reports the current line to the trace sink.
    pub fn peek_line(&self, rule: &str) {
        if let Some(trace) = &self.trace {
            trace.peek_line(rule, self.lexer.peek_line());
        }
    }

    /// Builds an error attributed to the innermost active rule.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        let rule = self.rules.last().copied().unwrap_or("ParserCore");
        ParseError::new(rule, kind, self.lexer.rest())
    }

    fn lift<T>(&self, result: LexResult<T>) -> Result<T, ParseError> {
        result.map_err(|kind| self.error(kind))
    }

    pub fn look_ahead(&self, k: usize) -> Result<char, ParseError> {
        self.lift(self.lexer.look_ahead(k))
    }

    pub fn peek(&self, k: usize) -> Option<char> {
        self.lexer.peek(k)
    }

    pub fn consume(&mut self, k: usize) -> Result<(), ParseError> {
        let result = self.lexer.consume(k);
        self.lift(result)
    }

    pub fn match_char(&mut self, expected: char) -> Result<Token, ParseError> {
        let result = self.lexer.match_char(expected);
        self.lift(result)
    }

    pub fn match_id(&mut self) -> Result<Token, ParseError> {
        let result = self.lexer.match_id();
        self.lift(result)
    }

    pub fn quoted_string(&mut self) -> Result<SmolStr, ParseError> {
        let result = self.lexer.quoted_string();
        self.lift(result)
    }

    pub fn sp_or_ht(&mut self) -> usize {
        self.lexer.sp_or_ht()
    }

    pub fn at_end_of_line(&self) -> bool {
        self.lexer.is_end_of_line()
    }

    /// `name [SP/HT separator SP/HT (quoted-string / token)]`
    ///
    /// A missing separator yields an empty, unquoted value.
    pub fn get_name_value(&mut self, separator: char) -> Result<NameValue, ParseError> {
        self.rule("nameValue", |core| {
            let name = core.match_id()?.into_value();
            core.sp_or_ht();
            if core.peek(0) != Some(separator) {
                return Ok(NameValue::new(name, SmolStr::default()));
            }
            core.consume(1)?;
            core.sp_or_ht();
            if core.peek(0) == Some('"') {
                let value = core.quoted_string()?;
                Ok(NameValue::quoted(name, value))
            } else {
                let value = core.match_id()?.into_value();
                Ok(NameValue::new(name, value))
            }
        })
    }

    /// `header-name SP/HT ":" SP/HT`, matching `expected` in any case or
    /// compact form.
    pub fn header_name(&mut self, expected: &HeaderName) -> Result<(), ParseError> {
        self.rule("headerName", |core| {
            let token = core.match_id()?;
            if !expected.matches(token.value()) {
                return Err(core.error(ParseErrorKind::UnexpectedToken {
                    expected: SmolStr::new(format!("header name '{}'", expected)),
                    found: SmolStr::new(format!("'{}'", token.value())),
                    position: token.position(),
                }));
            }
            core.sp_or_ht();
            core.match_char(':')?;
            core.sp_or_ht();
            Ok(())
        })
    }

    /// Trailing whitespace, then end of line; consumes the line terminator.
    pub fn end_header(&mut self) -> Result<(), ParseError> {
        self.sp_or_ht();
        if !self.at_end_of_line() {
            let kind = ParseErrorKind::UnexpectedToken {
                expected: SmolStr::new_inline("end of line"),
                found: SmolStr::new(format!("{:?}", self.peek(0).unwrap_or_default())),
                position: self.lexer.position(),
            };
            return Err(self.error(kind));
        }
        self.lexer.end_of_line();
        Ok(())
    }
}
