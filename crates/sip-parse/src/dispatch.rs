// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selects a header parser from the header name at the cursor.

use sip_core::{HeaderName, Headers, SipHeader};
use smol_str::SmolStr;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::parser_core::ParserCore;
use crate::parsers::{
    AcceptEncodingParser, AcceptLanguageParser, ContentDispositionParser, ExtensionParser,
    HeaderParser, MaxForwardsParser, TokenListParser,
};

/// Parses one `Name: value` line with the default configuration.
///
/// # Examples
///
/// ```
/// use sip_core::{Header, SipHeader};
/// use sip_parse::parse_header_line;
///
/// let header = parse_header_line("Accept-Encoding: compress;q=0.5, gzip\r\n").unwrap();
/// assert!(header.is_header_list());
/// assert_eq!(header.encode_body(), "compress;q=0.5, gzip");
/// ```
pub fn parse_header_line(text: &str) -> Result<SipHeader, ParseError> {
    parse_header_line_with(text, &ParserConfig::default())
}

/// Like [`parse_header_line`]. Anything after the first line terminator is
/// an error; use [`HeaderStream`] for a block of headers.
pub fn parse_header_line_with(text: &str, config: &ParserConfig) -> Result<SipHeader, ParseError> {
    let core = ParserCore::with_config(text, config)?;
    let (header, core) = dispatch(core)?;
    let lexer = core.lexer();
    if !lexer.is_at_end() {
        return Err(ParseError::new(
            "parseHeaderLine",
            ParseErrorKind::UnexpectedToken {
                expected: SmolStr::new_inline("end of input"),
                found: SmolStr::new(format!("{:?}", lexer.peek(0).unwrap_or_default())),
                position: lexer.position(),
            },
            lexer.rest(),
        ));
    }
    Ok(header)
}

/// Parses a raw `(name, value)` pair as handed over by the message assembler.
pub fn parse_header(name: &str, value: &str) -> Result<SipHeader, ParseError> {
    let line = format!("{}: {}\r\n", name.trim(), value.trim());
    parse_header_line(&line)
}

/// Parses every field of `headers`, in order. The first failure aborts.
pub fn parse_headers(headers: &Headers) -> Result<Vec<SipHeader>, ParseError> {
    headers
        .iter()
        .map(|raw| parse_header(&raw.name, &raw.value))
        .collect()
}

/// Parses consecutive header lines from one buffer with a single lexer.
///
/// Iteration stops at end of input or at an empty line (the end of a
/// header block). After an error the stream is exhausted.
pub struct HeaderStream<'a> {
    core: Option<ParserCore<'a>>,
}

impl<'a> HeaderStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            core: Some(ParserCore::new(text)),
        }
    }

    pub fn with_config(text: &'a str, config: &ParserConfig) -> Result<Self, ParseError> {
        Ok(Self {
            core: Some(ParserCore::with_config(text, config)?),
        })
    }
}

impl<'a> Iterator for HeaderStream<'a> {
    type Item = Result<SipHeader, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let core = self.core.take()?;
        if core.at_end_of_line() {
            return None;
        }
        match dispatch(core) {
            Ok((header, core)) => {
                self.core = Some(core);
                Some(Ok(header))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

fn dispatch(core: ParserCore<'_>) -> Result<(SipHeader, ParserCore<'_>), ParseError> {
    let Some(wire_name) = core.lexer().peek_id() else {
        let kind = ParseErrorKind::UnexpectedToken {
            expected: SmolStr::new_inline("header name"),
            found: SmolStr::new(format!("{:?}", core.lexer().peek_line())),
            position: core.lexer().position(),
        };
        return Err(core.error(kind));
    };
    let name = HeaderName::from_wire(wire_name);
    let _span = sip_observe::span_for_header(name.as_str()).entered();
    debug!(header = %name, "dispatching header parser");

    match name {
        HeaderName::AcceptEncoding => run(
            AcceptEncodingParser::from_core(core),
            SipHeader::AcceptEncoding,
        ),
        HeaderName::AcceptLanguage => run(
            AcceptLanguageParser::from_core(core),
            SipHeader::AcceptLanguage,
        ),
        HeaderName::ContentDisposition => run(
            ContentDispositionParser::from_core(core),
            SipHeader::ContentDisposition,
        ),
        HeaderName::MaxForwards => run(MaxForwardsParser::from_core(core), SipHeader::MaxForwards),
        HeaderName::Extension(_) => run(ExtensionParser::from_core(core), SipHeader::Extension),
        header => run(TokenListParser::for_header(header, core), SipHeader::Tokens),
    }
}

fn run<'a, P: HeaderParser<'a>>(
    mut parser: P,
    wrap: impl FnOnce(P::Output) -> SipHeader,
) -> Result<(SipHeader, ParserCore<'a>), ParseError> {
    let output = parser.parse()?;
    Ok((wrap(output), parser.into_core()))
}
