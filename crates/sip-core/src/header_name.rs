// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use smol_str::SmolStr;

/// Header field names known to the parser stack.
///
/// Field names are case-insensitive on the wire; [`HeaderName::as_str`]
/// always yields the canonical spelling. Names outside this set are carried
/// as [`HeaderName::Extension`] with the spelling they arrived with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HeaderName {
    AcceptEncoding,
    AcceptLanguage,
    Allow,
    ContentDisposition,
    ContentEncoding,
    MaxForwards,
    ProxyRequire,
    Require,
    Supported,
    Unsupported,
    Extension(SmolStr),
}

impl HeaderName {
    /// Maps a wire name (full or compact form, any case) to a header name.
    pub fn from_wire(name: &str) -> Self {
        let name = name.trim();
        match name.to_ascii_lowercase().as_str() {
            "accept-encoding" => Self::AcceptEncoding,
            "accept-language" => Self::AcceptLanguage,
            "allow" => Self::Allow,
            "content-disposition" => Self::ContentDisposition,
            "content-encoding" | "e" => Self::ContentEncoding,
            "max-forwards" => Self::MaxForwards,
            "proxy-require" => Self::ProxyRequire,
            "require" => Self::Require,
            "supported" | "k" => Self::Supported,
            "unsupported" => Self::Unsupported,
            _ => Self::Extension(SmolStr::new(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::AcceptEncoding => "Accept-Encoding",
            Self::AcceptLanguage => "Accept-Language",
            Self::Allow => "Allow",
            Self::ContentDisposition => "Content-Disposition",
            Self::ContentEncoding => "Content-Encoding",
            Self::MaxForwards => "Max-Forwards",
            Self::ProxyRequire => "Proxy-Require",
            Self::Require => "Require",
            Self::Supported => "Supported",
            Self::Unsupported => "Unsupported",
            Self::Extension(name) => name.as_str(),
        }
    }

    /// Compact form defined by RFC 3261 §7.3.3, if any.
    pub fn compact_form(&self) -> Option<&'static str> {
        match self {
            Self::ContentEncoding => Some("e"),
            Self::Supported => Some("k"),
            _ => None,
        }
    }

    /// `true` for headers whose wire form may repeat as a comma-separated
    /// list or as repeated lines.
    pub fn is_list(&self) -> bool {
        !matches!(
            self,
            Self::ContentDisposition | Self::MaxForwards | Self::Extension(_)
        )
    }

    /// Compares against a wire name ignoring case and accepting compact forms.
    pub fn matches(&self, wire: &str) -> bool {
        let wire = wire.trim();
        self.as_str().eq_ignore_ascii_case(wire)
            || self
                .compact_form()
                .is_some_and(|c| c.eq_ignore_ascii_case(wire))
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_canonicalized() {
        assert_eq!(HeaderName::from_wire("accept-ENCODING"), HeaderName::AcceptEncoding);
        assert_eq!(HeaderName::from_wire("accept-encoding").as_str(), "Accept-Encoding");
        assert_eq!(HeaderName::from_wire("k"), HeaderName::Supported);
        assert_eq!(HeaderName::from_wire("E"), HeaderName::ContentEncoding);
    }

    #[test]
    fn unknown_names_keep_their_spelling() {
        let name = HeaderName::from_wire("X-Custom");
        assert_eq!(name, HeaderName::Extension(SmolStr::new("X-Custom")));
        assert!(name.matches("x-custom"));
        assert!(!name.is_list());
    }

    #[test]
    fn matches_accepts_compact_form() {
        assert!(HeaderName::Supported.matches("K"));
        assert!(HeaderName::Supported.matches("supported"));
        assert!(!HeaderName::Require.matches("k"));
    }
}
