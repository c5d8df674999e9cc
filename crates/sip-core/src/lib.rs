// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed SIP header object model.
//!
//! This crate holds what the header parsers in `sip-parse` produce:
//! - **Capability set**: the [`Header`] trait, [`HeaderList`] for repeatable
//!   headers and the closed [`SipHeader`] enum
//! - **Parameters**: [`NameValue`] pairs (quoting preserved) in an ordered,
//!   duplicate-free [`Params`] set
//! - **Headers**: [`AcceptEncoding`], [`AcceptLanguage`], token lists
//!   (Allow, Supported, ...), [`ContentDisposition`], [`MaxForwards`] and
//!   [`ExtensionHeader`] for everything else
//! - **Raw fields**: the [`Headers`] container handed over by the message
//!   assembler
//!
//! # Examples
//!
//! ```
//! use sip_core::{AcceptEncoding, Header, HeaderList, HeaderName};
//!
//! let mut list = HeaderList::new(HeaderName::AcceptEncoding);
//! list.push(AcceptEncoding::new("gzip").unwrap());
//! assert_eq!(list.encode(), "Accept-Encoding: gzip\r\n");
//! ```

pub mod accept_encoding;
pub mod accept_language;
pub mod content_disposition;
pub mod error;
pub mod extension;
pub mod header;
pub mod header_name;
pub mod headers;
pub mod max_forwards;
pub mod name_value;
pub mod params;
pub mod qvalue;
pub mod token_list;

pub use accept_encoding::{AcceptEncoding, AcceptEncodingList};
pub use accept_language::{AcceptLanguage, AcceptLanguageList};
pub use content_disposition::ContentDisposition;
pub use error::{is_token_char, HeaderError};
pub use extension::ExtensionHeader;
pub use header::{Header, HeaderList, SipHeader};
pub use header_name::HeaderName;
pub use headers::{Headers, RawHeader};
pub use max_forwards::MaxForwards;
pub use name_value::NameValue;
pub use params::Params;
pub use qvalue::{validate_q_value, QVALUE_UNSET};
pub use token_list::{
    AllowHeader, ContentEncodingHeader, RequireHeader, SupportedHeader, TokenList, TokenValue,
};
