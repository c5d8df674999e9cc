// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ```text
//! Accept-Language  = "Accept-Language" HCOLON
//!                    [ language *(COMMA language) ]
//! language         = language-range *(SEMI accept-param)
//! ```

use sip_core::{AcceptLanguage, AcceptLanguageList, HeaderName};

use super::qvalue::q_param;
use super::HeaderParser;
use crate::error::ParseError;
use crate::parser_core::ParserCore;

pub struct AcceptLanguageParser<'a> {
    core: ParserCore<'a>,
}

impl<'a> HeaderParser<'a> for AcceptLanguageParser<'a> {
    type Output = AcceptLanguageList;

    fn from_core(core: ParserCore<'a>) -> Self {
        Self { core }
    }

    fn into_core(self) -> ParserCore<'a> {
        self.core
    }

    fn parse(&mut self) -> Result<AcceptLanguageList, ParseError> {
        self.core.rule("AcceptLanguageParser.parse", |core| {
            core.header_name(&HeaderName::AcceptLanguage)?;
            let mut list = AcceptLanguageList::new(HeaderName::AcceptLanguage);

            while !core.at_end_of_line() {
                let range = core.match_id()?;
                let mut value =
                    AcceptLanguage::new(range.value()).map_err(|e| core.error(e.into()))?;
                core.sp_or_ht();

                let mut seen_q = false;
                while core.peek(0) == Some(';') {
                    let q = q_param(core, &mut seen_q)?;
                    value.set_q_value(q).map_err(|e| core.error(e.into()))?;
                }

                list.push(value);
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
    use crate::error::ParseErrorKind;

    #[test]
    fn parses_ranges_with_q() {
        let list = AcceptLanguageParser::new("Accept-Language: da, en-gb;q=0.8, en;q=0.7\n")
            .parse()
            .unwrap();
        let got: Vec<_> = list
            .iter()
            .map(|v| (v.language_range(), v.q_value()))
            .collect();
        assert_eq!(got, vec![("da", -1.0), ("en-gb", 0.8), ("en", 0.7)]);
    }

    #[test]
    fn empty_body_is_empty_list() {
        let list = AcceptLanguageParser::new("Accept-Language:\r\n")
            .parse()
            .unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn invalid_range_is_rejected() {
        let err = AcceptLanguageParser::new("Accept-Language: en_US\n")
            .parse()
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::InvalidParameterValue { value, .. } if value == "en_US"
        ));
    }
}
