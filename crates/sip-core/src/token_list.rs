// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use smol_str::SmolStr;

use crate::error::validate_token;
use crate::{Header, HeaderError, HeaderList, HeaderName};

/// One element of a comma-separated token header (Allow, Supported, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValue {
    header: HeaderName,
    token: SmolStr,
}

impl TokenValue {
    pub fn new(header: HeaderName, token: impl AsRef<str>) -> Result<Self, HeaderError> {
        let token = token.as_ref();
        validate_token(token)?;
        Ok(Self {
            header,
            token: SmolStr::new(token),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Header for TokenValue {
    fn name(&self) -> HeaderName {
        self.header.clone()
    }

    fn encode_body(&self) -> String {
        self.token.to_string()
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Comma-separated token header values.
pub type TokenList = HeaderList<TokenValue>;

pub type AllowHeader = TokenList;
pub type ContentEncodingHeader = TokenList;
pub type SupportedHeader = TokenList;
pub type RequireHeader = TokenList;

impl HeaderList<TokenValue> {
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(TokenValue::token)
    }

    /// Case-insensitive membership test (option tags, methods).
    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens().any(|t| t.eq_ignore_ascii_case(token))
    }

    /// Appends a token, validating it against this list's header name.
    pub fn push_token(&mut self, token: impl AsRef<str>) -> Result<(), HeaderError> {
        let value = TokenValue::new(self.header_name().clone(), token)?;
        self.push(value);
        Ok(())
    }
}
