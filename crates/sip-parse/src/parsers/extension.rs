// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sip_core::{ExtensionHeader, HeaderName};

use super::HeaderParser;
use crate::error::ParseError;
use crate::parser_core::ParserCore;

/// `extension-header = header-name HCOLON header-value`
///
/// The value is taken verbatim up to the end of the line.
pub struct ExtensionParser<'a> {
    core: ParserCore<'a>,
}

impl<'a> HeaderParser<'a> for ExtensionParser<'a> {
    type Output = ExtensionHeader;

    fn from_core(core: ParserCore<'a>) -> Self {
        Self { core }
    }

    fn into_core(self) -> ParserCore<'a> {
        self.core
    }

    fn parse(&mut self) -> Result<ExtensionHeader, ParseError> {
        self.core.rule("ExtensionParser.parse", |core| {
            let name = core.lexer().peek_id().unwrap_or_default();
            core.header_name(&HeaderName::from_wire(name))?;
            core.peek_line("ExtensionParser.parse");
            let value = core.lexer_mut().take_line();
            core.end_header()?;
            Ok(ExtensionHeader::new(name, value))
        })
    }
}
