// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ```text
//! Content-Disposition  = "Content-Disposition" HCOLON
//!                        disp-type *( SEMI disp-param )
//! disp-param           = handling-param / generic-param
//! ```

use sip_core::{ContentDisposition, HeaderName};

use super::HeaderParser;
use crate::error::ParseError;
use crate::parser_core::ParserCore;

pub struct ContentDispositionParser<'a> {
    core: ParserCore<'a>,
}

impl<'a> HeaderParser<'a> for ContentDispositionParser<'a> {
    type Output = ContentDisposition;

    fn from_core(core: ParserCore<'a>) -> Self {
        Self { core }
    }

    fn into_core(self) -> ParserCore<'a> {
        self.core
    }

    fn parse(&mut self) -> Result<ContentDisposition, ParseError> {
        self.core.rule("ContentDispositionParser.parse", |core| {
            core.header_name(&HeaderName::ContentDisposition)?;
            let disp_type = core.match_id()?;
            let mut header =
                ContentDisposition::new(disp_type.value()).map_err(|e| core.error(e.into()))?;
            core.sp_or_ht();

            while core.peek(0) == Some(';') {
                core.match_char(';')?;
                core.sp_or_ht();
                let param = core.get_name_value('=')?;
                header
                    .params_mut()
                    .insert(param)
                    .map_err(|e| core.error(e.into()))?;
                core.sp_or_ht();
            }

            core.end_header()?;
            Ok(header)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use sip_core::Header;

    #[test]
    fn keeps_param_quoting() {
        let header = ContentDispositionParser::new(
            "Content-Disposition: attachment; filename=\"smiley face.gif\";handling=optional\n",
        )
        .parse()
        .unwrap();
        assert_eq!(header.disposition_type(), "attachment");
        assert_eq!(header.handling(), Some("optional"));
        let filename = header.params().get("filename").unwrap();
        assert!(filename.is_quoted());
        assert_eq!(filename.value(), "smiley face.gif");
        assert_eq!(
            header.encode_body(),
            "attachment;filename=\"smiley face.gif\";handling=optional"
        );
        assert!(!header.is_header_list());
    }

    #[test]
    fn duplicate_param_is_rejected() {
        let err = ContentDispositionParser::new(
            "Content-Disposition: session;handling=optional;HANDLING=required\n",
        )
        .parse()
        .unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::DuplicateParameter { name } if name == "HANDLING"
        ));
    }

    #[test]
    fn unterminated_quote() {
        let err = ContentDispositionParser::new("Content-Disposition: render;x=\"abc\n")
            .parse()
            .unwrap_err();
        assert!(matches!(err.kind(), ParseErrorKind::UnterminatedQuote { .. }));
        assert_eq!(err.rule(), "nameValue");
    }
}
