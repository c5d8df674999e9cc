// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use parking_lot::Mutex;
use sip_core::Header;
use sip_observe::ParserTrace;
use sip_parse::{parse_header_line_with, ParserConfig};

#[derive(Default)]
struct CountingTrace {
    entered: Mutex<usize>,
    left: Mutex<usize>,
}

impl ParserTrace for CountingTrace {
    fn enter(&self, _depth: usize, _rule: &str, _rest: &str) {
        *self.entered.lock() += 1;
    }

    fn leave(&self, _depth: usize, _rule: &str) {
        *self.left.lock() += 1;
    }

    fn peek_line(&self, _rule: &str, _line: &str) {}
}

#[test]
fn parsers_run_concurrently_with_shared_trace() {
    let trace = Arc::new(CountingTrace::default());
    let config = ParserConfig::default().with_trace(trace.clone());

    std::thread::scope(|scope| {
        for i in 0..8 {
            let config = config.clone();
            scope.spawn(move || {
                for j in 0..50 {
                    let line = format!("Accept-Encoding: c{}x{};q=0.5, gzip\r\n", i, j);
                    let header = parse_header_line_with(&line, &config).unwrap();
                    assert_eq!(header.encode_body(), format!("c{}x{};q=0.5, gzip", i, j));
                }
            });
        }
    });

    let entered = *trace.entered.lock();
    assert!(entered > 0);
    assert_eq!(entered, *trace.left.lock());
}

#[test]
fn failed_parse_still_balances_trace() {
    let trace = Arc::new(CountingTrace::default());
    let config = ParserConfig::default().with_trace(trace.clone());
    assert!(parse_header_line_with("Accept-Encoding: gzip;q=7\n", &config).is_err());
    assert_eq!(*trace.entered.lock(), *trace.left.lock());
}
