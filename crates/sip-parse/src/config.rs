// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

use sip_observe::ParserTrace;

/// Largest header span accepted by default.
pub const DEFAULT_MAX_HEADER_SIZE: usize = 8 * 1024;

/// Per-parse settings.
///
/// Cloning is cheap; the trace sink is shared and only read while parsing.
#[derive(Clone)]
pub struct ParserConfig {
    pub max_input_len: usize,
    pub trace: Option<Arc<dyn ParserTrace>>,
}

impl ParserConfig {
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn with_trace(mut self, trace: Arc<dyn ParserTrace>) -> Self {
        self.trace = Some(trace);
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_HEADER_SIZE,
            trace: None,
        }
    }
}

impl fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field("max_input_len", &self.max_input_len)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}
