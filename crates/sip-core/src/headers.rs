// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::slice::Iter;

use smol_str::SmolStr;

use crate::HeaderName;

/// One unparsed header field as split off by the message assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeader {
    pub name: SmolStr,
    pub value: SmolStr,
}

impl RawHeader {
    pub fn header_name(&self) -> HeaderName {
        HeaderName::from_wire(&self.name)
    }
}

/// Unparsed header fields preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<RawHeader>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(headers: Vec<RawHeader>) -> Self {
        Self(headers)
    }

    pub fn push(&mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) {
        self.0.push(RawHeader {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn iter(&self) -> Iter<'_, RawHeader> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First value whose name matches, ignoring case and accepting compact forms.
    pub fn get(&self, name: &HeaderName) -> Option<&SmolStr> {
        self.0
            .iter()
            .find(|h| name.matches(&h.name))
            .map(|h| &h.value)
    }

    /// All values with the given name, in wire order.
    pub fn get_all<'a>(&'a self, name: &'a HeaderName) -> impl Iterator<Item = &'a SmolStr> + 'a {
        self.0
            .iter()
            .filter(move |h| name.matches(&h.name))
            .map(|h| &h.value)
    }
}

impl IntoIterator for Headers {
    type Item = RawHeader;
    type IntoIter = std::vec::IntoIter<RawHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a RawHeader;
    type IntoIter = Iter<'a, RawHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
