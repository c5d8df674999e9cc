// siphon-rs - The Siphon SIP Stack
// Copyright (C) 2025 James Ferris <ferrous.communications@gmail.com>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::slice::Iter;

use smol_str::SmolStr;

use crate::{HeaderError, NameValue};

/// Ordered parameter set of one header value.
///
/// Names compare ignoring ASCII case. A name may appear at most once:
/// [`Params::insert`] rejects a repeat, [`Params::set`] replaces in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<NameValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter received from the wire.
    pub fn insert(&mut self, param: NameValue) -> Result<(), HeaderError> {
        if self.contains(param.name()) {
            return Err(HeaderError::DuplicateParameter(SmolStr::new(param.name())));
        }
        self.0.push(param);
        Ok(())
    }

    /// Sets a parameter, replacing any existing one with the same name.
    pub fn set(&mut self, param: NameValue) {
        match self
            .0
            .iter_mut()
            .find(|p| p.name().eq_ignore_ascii_case(param.name()))
        {
            Some(existing) => *existing = param,
            None => self.0.push(param),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NameValue> {
        self.0.iter().find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Value of the named parameter; `Some("")` for a bare name.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(NameValue::value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<NameValue> {
        let idx = self
            .0
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(name))?;
        Some(self.0.remove(idx))
    }

    pub fn iter(&self) -> Iter<'_, NameValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a NameValue;
    type IntoIter = Iter<'a, NameValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders `;name[=value]` for every parameter, in insertion order.
impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in &self.0 {
            write!(f, ";{}", param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_duplicate_names_ignoring_case() {
        let mut params = Params::new();
        params.insert(NameValue::new("handling", "required")).unwrap();
        let err = params
            .insert(NameValue::new("HANDLING", "optional"))
            .unwrap_err();
        assert_eq!(err, HeaderError::DuplicateParameter(SmolStr::new("HANDLING")));
        assert_eq!(params.value("handling"), Some("required"));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut params = Params::new();
        params.insert(NameValue::new("a", "1")).unwrap();
        params.insert(NameValue::flag("b")).unwrap();
        params.set(NameValue::quoted("a", "2"));
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_string(), ";a=\"2\";b");
    }

    #[test]
    fn remove_returns_the_parameter() {
        let mut params = Params::new();
        params.insert(NameValue::new("a", "1")).unwrap();
        assert_eq!(params.remove("A").map(|p| p.value().to_owned()), Some("1".into()));
        assert!(params.is_empty());
        assert!(params.remove("a").is_none());
    }
}
