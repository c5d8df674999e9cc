// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use sip_core::HeaderError;
use smol_str::SmolStr;

/// What went wrong, independent of where.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Lookahead or consume past the end of the buffer
    EndOfInput { position: usize },
    /// The grammar expected something else at `position`
    UnexpectedToken {
        expected: SmolStr,
        found: SmolStr,
        position: usize,
    },
    /// A quoted-string starting at `position` has no closing quote
    UnterminatedQuote { position: usize },
    /// A parameter value failed type-specific validation
    InvalidParameterValue {
        name: SmolStr,
        value: SmolStr,
        reason: String,
    },
    /// The same parameter appeared twice on one header value
    DuplicateParameter { name: SmolStr },
    /// Input exceeds the configured maximum
    InputTooLarge { max: usize, actual: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfInput { position } => write!(f, "unexpected end of input at {}", position),
            Self::UnexpectedToken {
                expected,
                found,
                position,
            } => write!(f, "expected {} but found {} at {}", expected, found, position),
            Self::UnterminatedQuote { position } => {
                write!(f, "unterminated quoted string starting at {}", position)
            }
            Self::InvalidParameterValue {
                name,
                value,
                reason,
            } => write!(f, "invalid value '{}' for '{}': {}", value, name, reason),
            Self::DuplicateParameter { name } => write!(f, "duplicate parameter '{}'", name),
            Self::InputTooLarge { max, actual } => {
                write!(f, "input too large (max {}, got {})", max, actual)
            }
        }
    }
}

impl From<HeaderError> for ParseErrorKind {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::InvalidQValue(q) => Self::InvalidParameterValue {
                name: SmolStr::new_inline("q"),
                value: SmolStr::new(q.to_string()),
                reason: "q-value must be in [0, 1]".to_string(),
            },
            HeaderError::DuplicateParameter(name) => Self::DuplicateParameter { name },
            HeaderError::InvalidToken(token) => Self::InvalidParameterValue {
                name: SmolStr::new_inline("token"),
                value: SmolStr::new(token),
                reason: "not a valid token".to_string(),
            },
            HeaderError::InvalidValue { value, reason } => Self::InvalidParameterValue {
                name: SmolStr::new_inline("value"),
                value,
                reason,
            },
        }
    }
}

/// A failed parse: the rule that failed, why, and the unconsumed input.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    rule: &'static str,
    kind: ParseErrorKind,
    rest: String,
}

impl ParseError {
    pub fn new(rule: &'static str, kind: ParseErrorKind, rest: impl Into<String>) -> Self {
        Self {
            rule,
            kind,
            rest: rest.into(),
        }
    }

    /// Name of the innermost grammar rule active when the error was raised.
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Input left unconsumed at the point of failure.
    pub fn rest(&self) -> &str {
        &self.rest
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (remaining: {:?})", self.rule, self.kind, self.rest)
    }
}

impl std::error::Error for ParseError {}
