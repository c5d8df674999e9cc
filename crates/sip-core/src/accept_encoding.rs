// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accept-Encoding header (RFC 3261 Section 20.2).
//!
//! Restricts the content-codings acceptable in a response. Each coding may
//! carry a `q` preference weight.
//!
//! # Format
//!
//! ```text
//! Accept-Encoding: compress, gzip
//! Accept-Encoding:
//! Accept-Encoding: gzip;q=1.0, identity; q=0.5, *;q=0
//! ```
//!
//! An empty Accept-Encoding is equivalent to `identity`; it is represented as
//! a list holding one value with an empty encoding.

use std::fmt;

use smol_str::SmolStr;

use crate::error::validate_token;
use crate::qvalue::{checked_q_value, write_q_param, QVALUE_UNSET};
use crate::{Header, HeaderError, HeaderList, HeaderName};

pub type AcceptEncodingList = HeaderList<AcceptEncoding>;

/// One content-coding of an Accept-Encoding header.
///
/// # Examples
///
/// ```
/// use sip_core::{AcceptEncoding, Header};
///
/// let mut gzip = AcceptEncoding::new("gzip").unwrap();
/// gzip.set_q_value(0.5).unwrap();
/// assert_eq!(gzip.encode_body(), "gzip;q=0.5");
/// assert!(gzip.set_q_value(2.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptEncoding {
    encoding: SmolStr,
    q_value: f32,
}

impl Default for AcceptEncoding {
    fn default() -> Self {
        Self {
            encoding: SmolStr::default(),
            q_value: QVALUE_UNSET,
        }
    }
}

impl AcceptEncoding {
    pub fn new(encoding: impl AsRef<str>) -> Result<Self, HeaderError> {
        let mut value = Self::default();
        value.set_encoding(encoding)?;
        Ok(value)
    }

    /// Content-coding; empty for the empty-body form.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn set_encoding(&mut self, encoding: impl AsRef<str>) -> Result<(), HeaderError> {
        let encoding = encoding.as_ref();
        if !encoding.is_empty() {
            validate_token(encoding)?;
        }
        self.encoding = SmolStr::new(encoding);
        Ok(())
    }

    /// The q-value, or [`QVALUE_UNSET`] when absent.
    pub fn q_value(&self) -> f32 {
        self.q_value
    }

    pub fn has_q_value(&self) -> bool {
        self.q_value != QVALUE_UNSET
    }

    /// Sets the q-value; [`QVALUE_UNSET`] clears it.
    pub fn set_q_value(&mut self, q: f32) -> Result<(), HeaderError> {
        self.q_value = checked_q_value(q)?;
        Ok(())
    }

    pub fn is_wildcard(&self) -> bool {
        self.encoding == "*"
    }
}

impl Header for AcceptEncoding {
    fn name(&self) -> HeaderName {
        HeaderName::AcceptEncoding
    }

    fn encode_body(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AcceptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoding)?;
        write_q_param(f, self.q_value)
    }
}
