// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accept-Encoding parser.
//!
//! ```text
//! Accept-Encoding  = "Accept-Encoding" HCOLON
//!                    [ encoding *(COMMA encoding) ]
//! encoding         = codings *(SEMI accept-param)
//! codings          = content-coding / "*"
//! ```
//!
//! ```text
//! Accept-Encoding: compress, gzip
//! Accept-Encoding:
//! Accept-Encoding: *
//! Accept-Encoding: compress;q=0.5, gzip;q=1.0
//! Accept-Encoding: gzip;q=1.0, identity; q=0.5, *;q=0
//! ```

use sip_core::{AcceptEncoding, AcceptEncodingList, HeaderName};

use super::qvalue::q_param;
use super::HeaderParser;
use crate::error::ParseError;
use crate::parser_core::ParserCore;

pub struct AcceptEncodingParser<'a> {
    core: ParserCore<'a>,
}

impl<'a> HeaderParser<'a> for AcceptEncodingParser<'a> {
    type Output = AcceptEncodingList;

    fn from_core(core: ParserCore<'a>) -> Self {
        Self { core }
    }

    fn into_core(self) -> ParserCore<'a> {
        self.core
    }

    fn parse(&mut self) -> Result<AcceptEncodingList, ParseError> {
        self.core.rule("AcceptEncodingParser.parse", |core| {
            core.header_name(&HeaderName::AcceptEncoding)?;
            let mut list = AcceptEncodingList::new(HeaderName::AcceptEncoding);

            // An empty Accept-Encoding means "identity".
            if core.at_end_of_line() {
                list.push(AcceptEncoding::default());
                core.end_header()?;
                return Ok(list);
            }

            while !core.at_end_of_line() {
                let mut value = AcceptEncoding::default();
                if core.peek(0) != Some(';') {
                    let coding = core.match_id()?;
                    value
                        .set_encoding(coding.value())
                        .map_err(|e| core.error(e.into()))?;
                    core.sp_or_ht();
                }

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
    use sip_core::{Header, QVALUE_UNSET};

    fn parse(text: &str) -> Result<AcceptEncodingList, ParseError> {
        AcceptEncodingParser::new(text).parse()
    }

    #[test]
    fn empty_body_is_identity() {
        let list = parse("Accept-Encoding:\n").unwrap();
        assert_eq!(list.len(), 1);
        let only = list.first().unwrap();
        assert_eq!(only.encoding(), "");
        assert_eq!(only.q_value(), QVALUE_UNSET);

        assert_eq!(parse("Accept-Encoding:   \r\n").unwrap().len(), 1);
        assert_eq!(parse("Accept-Encoding:").unwrap().len(), 1);
    }

    #[test]
    fn values_in_wire_order() {
        let list = parse("Accept-Encoding: compress;q=0.5, gzip;q=1.0\n").unwrap();
        let got: Vec<_> = list.iter().map(|v| (v.encoding(), v.q_value())).collect();
        assert_eq!(got, vec![("compress", 0.5), ("gzip", 1.0)]);
    }

    #[test]
    fn wildcard_and_spaced_q() {
        let list = parse("Accept-Encoding: gzip;q=1.0, identity; q=0.5, *;q=0\n").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1).map(AcceptEncoding::q_value), Some(0.5));
        assert!(list.get(2).unwrap().is_wildcard());
        assert_eq!(list.get(2).map(AcceptEncoding::q_value), Some(0.0));
    }

    #[test]
    fn whitespace_around_every_delimiter() {
        let list = parse("accept-encoding :  gzip ; q = 0.3 ,  br  \n").unwrap();
        assert_eq!(list.encode_body(), "gzip;q=0.3, br");
    }

    #[test]
    fn q_out_of_range_is_rejected() {
        let err = parse("Accept-Encoding: gzip;q=2.0\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::InvalidParameterValue { name, value, .. }
                if name == "q" && value == "2.0"
        ));
        assert_eq!(err.rule(), "qParam");
    }

    #[test]
    fn q_zero_is_accepted() {
        let list = parse("Accept-Encoding: gzip;q=0\n").unwrap();
        assert_eq!(list.first().map(AcceptEncoding::q_value), Some(0.0));
    }

    #[test]
    fn malformed_q_is_rejected() {
        let err = parse("Accept-Encoding: gzip;q=high\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::InvalidParameterValue { .. }
        ));
    }

    #[test]
    fn repeated_q_is_duplicate_parameter() {
        let err = parse("Accept-Encoding: gzip;q=0.1;q=0.2\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::DuplicateParameter { name } if name == "q"
        ));
    }

    #[test]
    fn non_q_parameter_is_unexpected() {
        let err = parse("Accept-Encoding: gzip;level=9\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::UnexpectedToken { expected, .. } if expected == "'q'"
        ));
        assert!(err.rest().starts_with("=9"));
    }

    #[test]
    fn wrong_header_name() {
        let err = parse("Accept-Language: en\n").unwrap_err();
        assert_eq!(err.rule(), "headerName");
    }

    #[test]
    fn lexer_left_after_line() {
        let mut parser = AcceptEncodingParser::new("Accept-Encoding: gzip\r\nAllow: INVITE\r\n");
        parser.parse().unwrap();
        assert_eq!(parser.into_lexer().rest(), "Allow: INVITE\r\n");
    }
}
