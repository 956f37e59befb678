//! Source Code Access
//!
//! This module defines the [`Source`] trait through which the compiler reads the descriptor
//! source and resolves `{name}` parameter references, together with a ready-made
//! [`ParamSource`] that bundles a source string with a fixed parameter set. Plain `&str` and
//! `&[u8]` sources compile with an empty parameter environment.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

/// Provides the compiler with the raw source bytes and the parameter environment.
///
/// Parameter names are matched byte-exact: the reference `{ foo }` resolves the name ` foo `
/// including its padding, which a well-formed environment rejects.
pub trait Source {
  /// Returns the raw UTF-8 source bytes.
  fn data(&self) -> &[u8];

  /// Resolves a named parameter to its value, or `None` if the name is unknown.
  fn find(&self, name: &[u8]) -> Option<i64>;
}

impl Source for str {
  fn data(&self) -> &[u8] {
    self.as_bytes()
  }

  fn find(&self, _name: &[u8]) -> Option<i64> {
    None
  }
}

impl Source for [u8] {
  fn data(&self) -> &[u8] {
    self
  }

  fn find(&self, _name: &[u8]) -> Option<i64> {
    None
  }
}

/// Single named source parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
  pub name: &'a str,
  pub value: i64,
}

impl<'a> Param<'a> {
  pub const fn new(name: &'a str, value: i64) -> Self {
    Param { name, value }
  }
}

/// Descriptor source with an attached parameter set.
///
/// When several parameters share a name, the last one wins.
#[derive(Debug, Clone, Copy)]
pub struct ParamSource<'a> {
  code: &'a str,
  params: &'a [Param<'a>],
}

impl<'a> ParamSource<'a> {
  pub const fn new(code: &'a str, params: &'a [Param<'a>]) -> Self {
    ParamSource { code, params }
  }
}

impl Source for ParamSource<'_> {
  fn data(&self) -> &[u8] {
    self.code.as_bytes()
  }

  fn find(&self, name: &[u8]) -> Option<i64> {
    self.params.iter().rev().find(|param| param.name.as_bytes() == name).map(|param| param.value)
  }
}

#[cfg(test)]
mod tests {
  use super::{Param, ParamSource, Source};

  #[test]
  fn find_should_match_names_byte_exact() {
    let params = [Param::new("ledCount", 5), Param::new(" padded ", 9)];
    let source = ParamSource::new("", &params);
    assert_eq!(source.find(b"ledCount"), Some(5));
    assert_eq!(source.find(b" padded "), Some(9));
    assert_eq!(source.find(b"LedCount"), None);
    assert_eq!(source.find(b"ledCount "), None);
  }

  #[test]
  fn find_should_prefer_the_last_definition() {
    let params = [Param::new("n", 1), Param::new("n", 2)];
    let source = ParamSource::new("", &params);
    assert_eq!(source.find(b"n"), Some(2));
  }

  #[test]
  fn plain_strings_should_have_no_parameters() {
    assert_eq!(Source::find("UsagePage(1)", b"anything"), None);
    assert_eq!(Source::data("42"), b"42");
  }
}
