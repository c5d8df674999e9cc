// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![no_main]
use libfuzzer_sys::fuzz_target;
use sip_core::{Header, SipHeader};
use sip_parse::parse_header_line;

fuzz_target!(|data: &[u8]| {
    if data.len() > 2048 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that parses must encode to text that parses back to the same kind.
    if let Ok(header) = parse_header_line(text) {
        let encoded = header.encode();
        let reparsed = parse_header_line(&encoded)
            .unwrap_or_else(|e| panic!("re-parse of {:?} failed: {}", encoded, e));
        assert_eq!(header.name(), reparsed.name());
        if let SipHeader::AcceptEncoding(_) | SipHeader::ContentDisposition(_) = header {
            assert_eq!(header, reparsed);
        }
    }
});
