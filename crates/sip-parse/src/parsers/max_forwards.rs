// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sip_core::{HeaderName, MaxForwards};
use smol_str::SmolStr;

use super::HeaderParser;
use crate::error::{ParseError, ParseErrorKind};
use crate::parser_core::ParserCore;

/// `Max-Forwards = "Max-Forwards" HCOLON 1*DIGIT`
pub struct MaxForwardsParser<'a> {
    core: ParserCore<'a>,
}

impl<'a> HeaderParser<'a> for MaxForwardsParser<'a> {
    type Output = MaxForwards;

    fn from_core(core: ParserCore<'a>) -> Self {
        Self { core }
    }

    fn into_core(self) -> ParserCore<'a> {
        self.core
    }

    fn parse(&mut self) -> Result<MaxForwards, ParseError> {
        self.core.rule("MaxForwardsParser.parse", |core| {
            core.header_name(&HeaderName::MaxForwards)?;
            let token = core.match_id()?;
            let digits = token.value();
            let hops = digits
                .bytes()
                .all(|b| b.is_ascii_digit())
                .then(|| digits.parse::<u32>().ok())
                .flatten()
                .ok_or_else(|| {
                    core.error(ParseErrorKind::InvalidParameterValue {
                        name: SmolStr::new_inline("Max-Forwards"),
                        value: SmolStr::new(digits),
                        reason: "expected a decimal hop count".to_string(),
                    })
                })?;
            core.end_header()?;
            Ok(MaxForwards::new(hops))
        })
    }
}
