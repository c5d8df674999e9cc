// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sip_core::validate_q_value;
use smol_str::SmolStr;

use crate::error::{ParseError, ParseErrorKind};
use crate::parser_core::ParserCore;

/// `";" SP/HT "q" SP/HT "=" SP/HT qvalue SP/HT`
///
/// `seen` tracks whether this value already carried a q parameter; a second
/// one is rejected.
pub(crate) fn q_param(core: &mut ParserCore<'_>, seen: &mut bool) -> Result<f32, ParseError> {
    core.rule("qParam", |core| {
        core.match_char(';')?;
        core.sp_or_ht();
        let name = core.match_id()?;
        if !name.value().eq_ignore_ascii_case("q") {
            return Err(core.error(ParseErrorKind::UnexpectedToken {
                expected: SmolStr::new_inline("'q'"),
                found: SmolStr::new(format!("'{}'", name.value())),
                position: name.position(),
            }));
        }
        if *seen {
            return Err(core.error(ParseErrorKind::DuplicateParameter {
                name: SmolStr::new_inline("q"),
            }));
        }
        *seen = true;
        core.sp_or_ht();
        core.match_char('=')?;
        core.sp_or_ht();
        let raw = core.match_id()?.into_value();
        let q = parse_q(&raw).map_err(|reason| {
            core.error(ParseErrorKind::InvalidParameterValue {
                name: SmolStr::new_inline("q"),
                value: raw.clone(),
                reason: reason.to_string(),
            })
        })?;
        core.sp_or_ht();
        Ok(q)
    })
}

fn parse_q(raw: &str) -> Result<f32, &'static str> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err("not a decimal number");
    }
    let q: f32 = raw.parse().map_err(|_| "not a decimal number")?;
    // The unset sentinel is not reachable here: '-' is rejected above.
    validate_q_value(q).map_err(|_| "q-value must be in [0, 1]")?;
    Ok(q)
}
