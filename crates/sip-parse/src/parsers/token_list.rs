// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comma-separated token headers: Allow, Content-Encoding, Supported,
//! Require, Proxy-Require and Unsupported.
//!
//! ```text
//! Allow: INVITE, ACK, OPTIONS, CANCEL, BYE
//! Supported:
//! k: 100rel, timer
//! ```

use sip_core::{HeaderName, TokenList, TokenValue};
use smol_str::SmolStr;

use super::HeaderParser;
use crate::error::{ParseError, ParseErrorKind};
use crate::parser_core::ParserCore;

pub struct TokenListParser<'a> {
    core: ParserCore<'a>,
    header: HeaderName,
}

impl<'a> TokenListParser<'a> {
    /// Parser bound to one token-list header name.
    pub fn for_header(header: HeaderName, core: ParserCore<'a>) -> Self {
        Self { core, header }
    }

    pub fn is_token_list(header: &HeaderName) -> bool {
        matches!(
            header,
            HeaderName::Allow
                | HeaderName::ContentEncoding
                | HeaderName::Supported
                | HeaderName::Require
                | HeaderName::ProxyRequire
                | HeaderName::Unsupported
        )
    }
}

impl<'a> HeaderParser<'a> for TokenListParser<'a> {
    type Output = TokenList;

    /// Binds to whichever header name the lexer is positioned on.
    fn from_core(core: ParserCore<'a>) -> Self {
        let header = core
            .lexer()
            .peek_id()
            .map(HeaderName::from_wire)
            .unwrap_or(HeaderName::Allow);
        Self::for_header(header, core)
    }

    fn into_core(self) -> ParserCore<'a> {
        self.core
    }

    fn parse(&mut self) -> Result<TokenList, ParseError> {
        let header = self.header.clone();
        self.core.rule("TokenListParser.parse", |core| {
            if !TokenListParser::is_token_list(&header) {
                return Err(core.error(ParseErrorKind::UnexpectedToken {
                    expected: SmolStr::new_inline("token-list header"),
                    found: SmolStr::new(format!("'{}'", header)),
                    position: core.lexer().position(),
                }));
            }
            core.header_name(&header)?;
            let mut list = TokenList::new(header.clone());

            while !core.at_end_of_line() {
                let token = core.match_id()?;
                let value =
                    TokenValue::new(header.clone(), token.value()).map_err(|e| core.error(e.into()))?;
                list.push(value);
                core.sp_or_ht();
                if core.peek(0) == Some(',') {
                    core.match_char(',')?;
                    core.sp_or_ht();
                }
            }

            core.end_header()?;
            Ok(list)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sip_core::Header;

    #[test]
    fn allow_methods() {
        let list = TokenListParser::new("Allow: INVITE, ACK,OPTIONS , BYE\n")
            .parse()
            .unwrap();
        assert_eq!(list.header_name(), &HeaderName::Allow);
        assert_eq!(list.tokens().collect::<Vec<_>>(), vec!["INVITE", "ACK", "OPTIONS", "BYE"]);
        assert_eq!(list.encode_body(), "INVITE, ACK, OPTIONS, BYE");
    }

    #[test]
    fn compact_supported() {
        let list = TokenListParser::new("k: 100rel, timer\r\n").parse().unwrap();
        assert_eq!(list.name(), HeaderName::Supported);
        assert!(list.contains_token("timer"));
    }

    #[test]
    fn empty_body_is_empty_list() {
        let list = TokenListParser::new("Supported:\n").parse().unwrap();
        assert!(list.is_empty());
        assert!(list.is_header_list());
    }

    #[test]
    fn rejects_non_token_header() {
        let err = TokenListParser::new("Max-Forwards: 70\n").parse().unwrap_err();
        assert_eq!(err.rule(), "TokenListParser.parse");
    }

    #[test]
    fn stray_delimiter_is_unexpected() {
        let err = TokenListParser::new("Require: 100rel; x\n").parse().unwrap_err();
        assert!(matches!(err.kind(), ParseErrorKind::UnexpectedToken { .. }));
        assert_eq!(err.rest(), "; x\n");
    }
}
