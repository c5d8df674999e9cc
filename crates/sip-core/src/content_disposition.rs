// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content-Disposition header (RFC 3261 Section 20.11).
//!
//! ```text
//! Content-Disposition: session;handling=optional
//! Content-Disposition: attachment; filename="smiley.gif"
//! ```

use std::fmt;

use smol_str::SmolStr;

use crate::error::validate_token;
use crate::{Header, HeaderError, HeaderName, Params};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDisposition {
    disposition_type: SmolStr,
    params: Params,
}

impl ContentDisposition {
    pub fn new(disposition_type: impl AsRef<str>) -> Result<Self, HeaderError> {
        let disposition_type = disposition_type.as_ref();
        validate_token(disposition_type)?;
        Ok(Self {
            disposition_type: SmolStr::new(disposition_type),
            params: Params::new(),
        })
    }

    pub fn disposition_type(&self) -> &str {
        &self.disposition_type
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// The `handling` parameter, if present.
    pub fn handling(&self) -> Option<&str> {
        self.params.value("handling")
    }
}

impl Header for ContentDisposition {
    fn name(&self) -> HeaderName {
        HeaderName::ContentDisposition
    }

    fn encode_body(&self) -> String {
        self.to_string()
    }

    fn params(&self) -> Option<&Params> {
        Some(&self.params)
    }

    fn params_mut(&mut self) -> Option<&mut Params> {
        Some(&mut self.params)
    }
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.disposition_type, self.params)
    }
}
