// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `name[=value]` pairs as they appear in header parameters.
//!
//! A bare `name` is stored with an empty value rather than an absent one.
//! The quoting flag is kept so that `name="value"` and `name=value`
//! re-encode exactly as they were received.

use std::fmt;

use smol_str::SmolStr;

/// One header parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameValue {
    name: SmolStr,
    value: SmolStr,
    quoted: bool,
}

impl NameValue {
    /// Creates an unquoted pair. An empty `value` encodes as a bare name.
    pub fn new(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            quoted: false,
        }
    }

    /// Creates a pair whose value is rendered as a quoted-string.
    pub fn quoted(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            quoted: true,
        }
    }

    /// Creates a bare `name` with no value.
    pub fn flag(name: impl Into<SmolStr>) -> Self {
        Self::new(name, SmolStr::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped value; empty when the parameter had no `=value`.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Marks the value as quoted (or not) for re-encoding.
    pub fn set_quoted(&mut self, quoted: bool) {
        self.quoted = quoted;
    }

    pub fn set_value(&mut self, value: impl Into<SmolStr>) {
        self.value = value.into();
    }

    /// Returns `true` when the pair is a bare name.
    pub fn is_flag(&self) -> bool {
        self.value.is_empty() && !self.quoted
    }
}

impl fmt::Display for NameValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_flag() {
            return f.write_str(&self.name);
        }
        if self.quoted {
            write!(f, "{}=\"", self.name)?;
            for ch in self.value.chars() {
                if ch == '"' || ch == '\\' {
                    f.write_str("\\")?;
                }
                write!(f, "{}", ch)?;
            }
            f.write_str("\"")
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}
