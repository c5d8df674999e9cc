// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use proptest::prelude::*;
use sip_core::{Header, SipHeader};
use sip_parse::{parse_header_line, AcceptEncodingParser, HeaderParser, Lexer};

fn coding() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        "[a-z][a-z0-9\\-]{0,10}",
    ]
}

fn q_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just("0".to_string()),
        Just("1".to_string()),
        "0\\.[0-9]{1,3}",
    ])
}

proptest! {
    /// Encoding a parsed Accept-Encoding and parsing it again yields the same list.
    #[test]
    fn accept_encoding_roundtrip(
        values in prop::collection::vec((coding(), q_text()), 1..6),
        spaced in prop::bool::ANY,
    ) {
        let sep = if spaced { " , " } else { "," };
        let body: Vec<String> = values
            .iter()
            .map(|(c, q)| match q {
                Some(q) if spaced => format!("{} ; q = {}", c, q),
                Some(q) => format!("{};q={}", c, q),
                None => c.clone(),
            })
            .collect();
        let line = format!("Accept-Encoding: {}\r\n", body.join(sep));

        let parsed = AcceptEncodingParser::new(&line).parse().unwrap();
        prop_assert_eq!(parsed.len(), values.len());
        for (value, (c, q)) in parsed.iter().zip(&values) {
            prop_assert_eq!(value.encoding(), c.as_str());
            match q {
                Some(q) => prop_assert_eq!(value.q_value(), q.parse::<f32>().unwrap()),
                None => prop_assert!(!value.has_q_value()),
            }
        }

        let reencoded = parsed.encode();
        let reparsed = AcceptEncodingParser::new(&reencoded).parse().unwrap();
        prop_assert_eq!(reparsed, parsed);
    }

    /// Quoted parameter values stay quoted and unquoted ones stay bare.
    #[test]
    fn disposition_params_roundtrip(
        disp in "[a-z]{1,8}",
        params in prop::collection::btree_map(
            "[a-z]{1,6}",
            (prop::bool::ANY, "[a-zA-Z0-9 \"\\\\]{0,10}", "[a-z0-9]{1,6}"),
            0..4,
        ),
    ) {
        let mut line = format!("Content-Disposition: {}", disp);
        for (name, (quoted, quoted_text, token)) in &params {
            if *quoted {
                let escaped = quoted_text.replace('\\', "\\\\").replace('"', "\\\"");
                line.push_str(&format!(";{}=\"{}\"", name, escaped));
            } else {
                line.push_str(&format!(";{}={}", name, token));
            }
        }
        line.push_str("\r\n");

        let header = parse_header_line(&line).unwrap();
        let params_seen = header.params().unwrap();
        for (name, (quoted, quoted_text, token)) in &params {
            let nv = params_seen.get(name).unwrap();
            prop_assert_eq!(nv.is_quoted(), *quoted);
            let expected = if *quoted { quoted_text } else { token };
            prop_assert_eq!(nv.value(), expected.as_str());
        }

        let reparsed = parse_header_line(&header.encode()).unwrap();
        prop_assert_eq!(reparsed, header);
    }

    /// Lookahead never moves the cursor; consume(k) takes exactly what was peeked.
    #[test]
    fn lookahead_then_consume(text in "\\PC{0,40}", k in 0usize..50) {
        let mut lexer = Lexer::new(&text);
        let peeked: Vec<char> = (0..k).map_while(|i| lexer.look_ahead(i).ok()).collect();
        prop_assert_eq!(lexer.position(), 0);

        if peeked.len() == k {
            lexer.consume(k).unwrap();
            let consumed: String = peeked.iter().collect();
            prop_assert_eq!(&text[..lexer.position()], consumed.as_str());
        } else {
            prop_assert!(lexer.consume(k).is_err());
            prop_assert_eq!(lexer.position(), 0);
        }
    }

    /// Arbitrary input never panics the dispatcher.
    #[test]
    fn dispatcher_total(text in "\\PC{0,80}") {
        let _ = parse_header_line(&text);
    }
}

#[test]
fn quote_preservation_examples() {
    let bare = parse_header_line("Content-Disposition: session;handling=optional\n").unwrap();
    let quoted = parse_header_line("Content-Disposition: session;handling=\"optional\"\n").unwrap();

    assert!(!bare.params().unwrap().get("handling").unwrap().is_quoted());
    assert!(quoted.params().unwrap().get("handling").unwrap().is_quoted());
    assert_eq!(bare.encode_body(), "session;handling=optional");
    assert_eq!(quoted.encode_body(), "session;handling=\"optional\"");
}

#[test]
fn bare_parameter_roundtrips_without_equals() {
    let header = parse_header_line("Content-Disposition: render;x;y=\"\"\n").unwrap();
    let params = header.params().unwrap();
    assert_eq!(params.get("x").unwrap().value(), "");
    assert!(!params.get("x").unwrap().is_quoted());
    assert!(params.get("y").unwrap().is_quoted());
    assert_eq!(header.encode_body(), "render;x;y=\"\"");
}

#[test]
fn clone_is_deep() {
    let original = parse_header_line("Content-Disposition: session;handling=required\n").unwrap();
    let mut copy = original.clone();
    if let SipHeader::ContentDisposition(cd) = &mut copy {
        cd.params_mut().remove("handling");
    }
    assert_eq!(original.encode_body(), "session;handling=required");
    assert_eq!(copy.encode_body(), "session");
}

#[test]
fn constructed_zero_q_reparses() {
    let mut gzip = sip_core::AcceptEncoding::new("gzip").unwrap();
    gzip.set_q_value(-0.0).unwrap();
    let mut list = sip_core::HeaderList::new(sip_core::HeaderName::AcceptEncoding);
    list.push(gzip);

    let reparsed = AcceptEncodingParser::new(&list.encode()).parse().unwrap();
    assert_eq!(reparsed.get(0).unwrap().q_value(), 0.0);
    assert_eq!(reparsed, list);
}
