// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive-descent SIP header parsers.
//!
//! The stack, leaf first:
//! - [`Lexer`]: cursor with lookahead, token matching and quoted-string
//!   extraction
//! - [`ParserCore`]: `name=value` extraction, rule nesting for tracing, and
//!   errors carrying the failing rule and the unconsumed input
//! - [`parsers`]: one [`HeaderParser`] per header name
//! - [`parse_header_line`] / [`HeaderStream`]: pick a parser from the name
//!
//! Parsers are synchronous and own their lexer; any number may run
//! concurrently on separate buffers.
//!
//! # Examples
//!
//! ```
//! use sip_parse::{AcceptEncodingParser, HeaderParser};
//!
//! let list = AcceptEncodingParser::new("Accept-Encoding: compress;q=0.5, gzip;q=1.0\n")
//!     .parse()
//!     .unwrap();
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.get(0).unwrap().q_value(), 0.5);
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod lexer;
pub mod parser_core;
pub mod parsers;

pub use config::{ParserConfig, DEFAULT_MAX_HEADER_SIZE};
pub use dispatch::{
    parse_header, parse_header_line, parse_header_line_with, parse_headers, HeaderStream,
};
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{LexResult, Lexer, Token, TokenKind};
pub use parser_core::ParserCore;
pub use parsers::{
    AcceptEncodingParser, AcceptLanguageParser, ContentDispositionParser, ExtensionParser,
    HeaderParser, MaxForwardsParser, TokenListParser,
};
