// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use smol_str::SmolStr;

use crate::{Header, HeaderName};

/// Header with no dedicated grammar; the value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionHeader {
    name: HeaderName,
    value: SmolStr,
}

impl ExtensionHeader {
    pub fn new(name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Self {
            name: HeaderName::from_wire(name.as_ref()),
            value: SmolStr::new(value.as_ref().trim()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl AsRef<str>) {
        self.value = SmolStr::new(value.as_ref().trim());
    }
}

impl Header for ExtensionHeader {
    fn name(&self) -> HeaderName {
        self.name.clone()
    }

    fn encode_body(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for ExtensionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
