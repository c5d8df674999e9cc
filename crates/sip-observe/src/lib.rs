// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic tracing for the recursive-descent header parsers.
//!
//! Parsers receive an optional [`ParserTrace`] at construction. With no sink
//! installed nothing is formatted or emitted.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use sip_observe::{ParserTrace, TracingParserTrace};
//!
//! let trace: Arc<dyn ParserTrace> = Arc::new(TracingParserTrace);
//! trace.enter(0, "acceptEncoding", "gzip\n");
//! trace.leave(0, "acceptEncoding");
//! ```

use tracing::Level;

/// Receives grammar-rule entry/exit events from a parser.
///
/// `depth` is the nesting level of the rule (0 for the outermost rule).
/// `rest` is the unconsumed input at the time of entry. Implementations must
/// not assume `rest` is trusted or short.
pub trait ParserTrace: Send + Sync + 'static {
    fn enter(&self, depth: usize, rule: &str, rest: &str);
    fn leave(&self, depth: usize, rule: &str);
    fn peek_line(&self, rule: &str, line: &str);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopParserTrace;

impl ParserTrace for NoopParserTrace {
    fn enter(&self, _depth: usize, _rule: &str, _rest: &str) {}
    fn leave(&self, _depth: usize, _rule: &str) {}
    fn peek_line(&self, _rule: &str, _line: &str) {}
}

/// Emits indented `TRACE` events under the `sip_parse` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingParserTrace;

impl ParserTrace for TracingParserTrace {
    fn enter(&self, depth: usize, rule: &str, rest: &str) {
        tracing::trace!(
            target: "sip_parse",
            depth,
            rest,
            "{}{}",
            nesting_prefix(depth, true),
            rule
        );
    }

    fn leave(&self, depth: usize, rule: &str) {
        tracing::trace!(
            target: "sip_parse",
            depth,
            "{}{}",
            nesting_prefix(depth, false),
            rule
        );
    }

    fn peek_line(&self, rule: &str, line: &str) {
        tracing::trace!(target: "sip_parse", line, "{}", rule);
    }
}

/// Creates a span covering the parse of one header.
pub fn span_for_header(header: &str) -> tracing::Span {
    tracing::span!(Level::DEBUG, "parse_header", header = header)
}

/// Renders the indentation prefix used for entry (`>`) and exit (`<`) lines.
pub fn nesting_prefix(depth: usize, entering: bool) -> String {
    let marker = if entering { ">" } else { "<" };
    marker.repeat(depth)
}
