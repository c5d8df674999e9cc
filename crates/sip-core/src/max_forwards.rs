// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use crate::{Header, HeaderName};

/// Max-Forwards header (RFC 3261 Section 20.22).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxForwards {
    hops: u32,
}

impl MaxForwards {
    pub const DEFAULT: u32 = 70;

    pub fn new(hops: u32) -> Self {
        Self { hops }
    }

    pub fn hops(&self) -> u32 {
        self.hops
    }
}

impl Default for MaxForwards {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl Header for MaxForwards {
    fn name(&self) -> HeaderName {
        HeaderName::MaxForwards
    }

    fn encode_body(&self) -> String {
        self.hops.to_string()
    }
}

impl fmt::Display for MaxForwards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_seventy() {
        assert_eq!(MaxForwards::default().encode(), "Max-Forwards: 70\r\n");
    }

    #[test]
    fn zero_and_max_encode_verbatim() {
        assert_eq!(MaxForwards::new(0).encode_body(), "0");
        assert_eq!(MaxForwards::new(u32::MAX).encode_body(), "4294967295");
    }
}
