// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use smol_str::SmolStr;

/// Errors returned by validating setters and constructors of header objects.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderError {
    /// q-value outside `[0, 1]` that is not the unset sentinel
    InvalidQValue(f32),
    /// The same parameter name was set twice on one header
    DuplicateParameter(SmolStr),
    /// Value is not a valid RFC 3261 token
    InvalidToken(String),
    /// Value failed header-specific validation
    InvalidValue { value: SmolStr, reason: String },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQValue(q) => write!(f, "q-value {} not in [0, 1]", q),
            Self::DuplicateParameter(name) => write!(f, "duplicate parameter '{}'", name),
            Self::InvalidToken(token) => write!(f, "invalid token '{}'", token),
            Self::InvalidValue { value, reason } => {
                write!(f, "invalid value '{}': {}", value, reason)
            }
        }
    }
}

impl std::error::Error for HeaderError {}

/// Returns `true` for characters allowed in an RFC 3261 `token`.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

pub(crate) fn validate_token(value: &str) -> Result<(), HeaderError> {
    if value.is_empty() || !value.chars().all(is_token_char) {
        return Err(HeaderError::InvalidToken(value.to_owned()));
    }
    Ok(())
}
