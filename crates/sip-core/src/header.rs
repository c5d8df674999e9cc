// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The header capability set and its list form.
//!
//! Every typed header implements [`Header`]. Headers whose wire form may
//! repeat (comma-joined or line-repeated) are handed out as a
//! [`HeaderList`], which preserves wire order. [`SipHeader`] closes the set
//! of kinds produced by the parser.
//!
//! `Clone` on any of these types is a deep copy: header values own their
//! strings and parameters, so mutating a clone never affects the source.

use std::fmt;
use std::slice::{Iter, IterMut};

use crate::{
    AcceptEncoding, AcceptLanguage, ContentDisposition, ExtensionHeader, HeaderName, MaxForwards,
    Params, TokenValue,
};

/// Capability set shared by all typed headers.
pub trait Header: fmt::Debug {
    /// Canonical header name, independent of the case used on the wire.
    fn name(&self) -> HeaderName;

    /// Renders the value and parameters as wire text (everything after
    /// `Name: `).
    fn encode_body(&self) -> String;

    fn params(&self) -> Option<&Params> {
        None
    }

    fn params_mut(&mut self) -> Option<&mut Params> {
        None
    }

    /// `true` when this object is the list form of a repeatable header.
    fn is_header_list(&self) -> bool {
        false
    }

    /// Full header line: `Name: body\r\n`.
    fn encode(&self) -> String {
        format!("{}: {}\r\n", self.name(), self.encode_body())
    }
}

/// Ordered values sharing one header name.
///
/// An empty list is a valid representation of a header with an empty body.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderList<H> {
    name: HeaderName,
    items: Vec<H>,
}

impl<H> HeaderList<H> {
    pub fn new(name: HeaderName) -> Self {
        Self {
            name,
            items: Vec::new(),
        }
    }

    pub fn header_name(&self) -> &HeaderName {
        &self.name
    }

    pub fn push(&mut self, value: H) {
        self.items.push(value);
    }

    pub fn get(&self, index: usize) -> Option<&H> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&H> {
        self.items.first()
    }

    pub fn remove(&mut self, index: usize) -> Option<H> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn iter(&self) -> Iter<'_, H> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, H> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends every value of `other`, keeping order.
    pub fn extend(&mut self, other: HeaderList<H>) {
        self.items.extend(other.items);
    }

    pub fn into_inner(self) -> Vec<H> {
        self.items
    }
}

impl<H: Header> Header for HeaderList<H> {
    fn name(&self) -> HeaderName {
        self.name.clone()
    }

    fn encode_body(&self) -> String {
        self.items
            .iter()
            .map(Header::encode_body)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn is_header_list(&self) -> bool {
        true
    }
}

impl<H: Header> fmt::Display for HeaderList<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.encode_body())
    }
}

impl<H> IntoIterator for HeaderList<H> {
    type Item = H;
    type IntoIter = std::vec::IntoIter<H>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, H> IntoIterator for &'a HeaderList<H> {
    type Item = &'a H;
    type IntoIter = Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every header kind the parser stack produces.
#[derive(Debug, Clone, PartialEq)]
pub enum SipHeader {
    AcceptEncoding(HeaderList<AcceptEncoding>),
    AcceptLanguage(HeaderList<AcceptLanguage>),
    /// Allow, Content-Encoding, Supported, Require, Proxy-Require, Unsupported
    Tokens(HeaderList<TokenValue>),
    ContentDisposition(ContentDisposition),
    MaxForwards(MaxForwards),
    Extension(ExtensionHeader),
}

impl SipHeader {
    fn as_header(&self) -> &dyn Header {
        match self {
            Self::AcceptEncoding(h) => h,
            Self::AcceptLanguage(h) => h,
            Self::Tokens(h) => h,
            Self::ContentDisposition(h) => h,
            Self::MaxForwards(h) => h,
            Self::Extension(h) => h,
        }
    }

    fn as_header_mut(&mut self) -> &mut dyn Header {
        match self {
            Self::AcceptEncoding(h) => h,
            Self::AcceptLanguage(h) => h,
            Self::Tokens(h) => h,
            Self::ContentDisposition(h) => h,
            Self::MaxForwards(h) => h,
            Self::Extension(h) => h,
        }
    }
}

impl Header for SipHeader {
    fn name(&self) -> HeaderName {
        self.as_header().name()
    }

    fn encode_body(&self) -> String {
        self.as_header().encode_body()
    }

    fn params(&self) -> Option<&Params> {
        self.as_header().params()
    }

    fn params_mut(&mut self) -> Option<&mut Params> {
        self.as_header_mut().params_mut()
    }

    fn is_header_list(&self) -> bool {
        self.as_header().is_header_list()
    }
}

impl fmt::Display for SipHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.encode_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_preserves_insertion_order() {
        let mut list = HeaderList::new(HeaderName::AcceptEncoding);
        for coding in ["gzip", "compress", "identity"] {
            list.push(AcceptEncoding::new(coding).unwrap());
        }
        let order: Vec<_> = list.iter().map(AcceptEncoding::encoding).collect();
        assert_eq!(order, vec!["gzip", "compress", "identity"]);
        assert_eq!(list.remove(1).map(|v| v.encoding().to_owned()), Some("compress".into()));
        assert!(list.remove(7).is_none());
    }

    #[test]
    fn sip_header_delegates() {
        let header = SipHeader::MaxForwards(MaxForwards::new(69));
        assert_eq!(header.name(), HeaderName::MaxForwards);
        assert!(!header.is_header_list());
        assert!(header.params().is_none());
        assert_eq!(header.to_string(), "Max-Forwards: 69");

        let list = SipHeader::AcceptEncoding(HeaderList::new(HeaderName::AcceptEncoding));
        assert!(list.is_header_list());
        assert_eq!(list.encode(), "Accept-Encoding: \r\n");
    }

    #[test]
    fn cloned_list_is_independent() {
        let mut original = HeaderList::new(HeaderName::AcceptEncoding);
        original.push(AcceptEncoding::new("gzip").unwrap());
        let mut copy = original.clone();
        if let Some(first) = copy.iter_mut().next() {
            first.set_q_value(0.1).unwrap();
        }
        copy.push(AcceptEncoding::new("br").unwrap());
        assert_eq!(original.encode_body(), "gzip");
        assert_eq!(copy.encode_body(), "gzip;q=0.1, br");
    }
}
