// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One parser per header name.
//!
//! Every parser follows the same shape: match the header name, branch on an
//! empty body, loop over comma-separated values, and read per-value
//! parameters after `;`.

mod accept_encoding;
mod accept_language;
mod content_disposition;
mod extension;
mod max_forwards;
mod qvalue;
mod token_list;

pub use accept_encoding::AcceptEncodingParser;
pub use accept_language::AcceptLanguageParser;
pub use content_disposition::ContentDispositionParser;
pub use extension::ExtensionParser;
pub use max_forwards::MaxForwardsParser;
pub use token_list::TokenListParser;

use sip_core::Header;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::parser_core::ParserCore;

/// Construction and parse contract shared by all header parsers.
pub trait HeaderParser<'a>: Sized {
    type Output: Header;

    fn from_core(core: ParserCore<'a>) -> Self;

    fn into_core(self) -> ParserCore<'a>;

    /// Parses one header occurrence, consuming its line terminator.
    fn parse(&mut self) -> Result<Self::Output, ParseError>;

    fn new(text: &'a str) -> Self {
        Self::from_core(ParserCore::new(text))
    }

    fn from_lexer(lexer: Lexer<'a>) -> Self {
        Self::from_core(ParserCore::from_lexer(lexer))
    }

    fn with_config(text: &'a str, config: &ParserConfig) -> Result<Self, ParseError> {
        ParserCore::with_config(text, config).map(Self::from_core)
    }

    /// Hands the lexer back, positioned after the parsed header.
    fn into_lexer(self) -> Lexer<'a> {
        self.into_core().into_lexer()
    }
}
