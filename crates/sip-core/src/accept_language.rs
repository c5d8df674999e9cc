// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use smol_str::SmolStr;

use crate::qvalue::{checked_q_value, write_q_param, QVALUE_UNSET};
use crate::{Header, HeaderError, HeaderList, HeaderName};

pub type AcceptLanguageList = HeaderList<AcceptLanguage>;

/// One language-range of an Accept-Language header (RFC 3261 Section 20.3).
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptLanguage {
    language_range: SmolStr,
    q_value: f32,
}

impl AcceptLanguage {
    /// Accepts `*` or `1*8ALPHA *("-" 1*8ALPHA)`.
    pub fn new(language_range: impl AsRef<str>) -> Result<Self, HeaderError> {
        let range = language_range.as_ref();
        if !is_language_range(range) {
            return Err(HeaderError::InvalidValue {
                value: SmolStr::new(range),
                reason: "not a language-range".to_string(),
            });
        }
        Ok(Self {
            language_range: SmolStr::new(range),
            q_value: QVALUE_UNSET,
        })
    }

    pub fn language_range(&self) -> &str {
        &self.language_range
    }

    pub fn q_value(&self) -> f32 {
        self.q_value
    }

    pub fn has_q_value(&self) -> bool {
        self.q_value != QVALUE_UNSET
    }

    pub fn set_q_value(&mut self, q: f32) -> Result<(), HeaderError> {
        self.q_value = checked_q_value(q)?;
        Ok(())
    }
}

fn is_language_range(range: &str) -> bool {
    range == "*"
        || (!range.is_empty()
            && range.split('-').all(|part| {
                (1..=8).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic())
            }))
}

impl Header for AcceptLanguage {
    fn name(&self) -> HeaderName {
        HeaderName::AcceptLanguage
    }

    fn encode_body(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AcceptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language_range)?;
        write_q_param(f, self.q_value)
    }
}
