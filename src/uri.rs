// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display};
use url::Url;

/// An unvalidated URI reference, relative or absolute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriRef(String);

impl UriRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the reference against a base URL. An absolute reference
    /// resolves to itself; a reference the base cannot absorb is kept
    /// unchanged.
    pub fn resolve(&self, base: &Url) -> UriRef {
        match base.join(&self.0) {
            Ok(url) => UriRef(url.to_string()),
            Err(_) => self.clone(),
        }
    }
}

impl From<String> for UriRef {
    fn from(s: String) -> Self {
        UriRef(s)
    }
}

impl From<&str> for UriRef {
    fn from(s: &str) -> Self {
        UriRef(s.to_string())
    }
}

impl Display for UriRef {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative() {
        let base = Url::parse("http://test.com/").unwrap();
        let expected: UriRef = "http://test.com/style.css".into();

        let actual = UriRef::from("/style.css").resolve(&base);

        assert_eq!(actual, expected);
    }

    #[test]
    fn resolve_keeps_absolute() {
        let base = Url::parse("http://test.com/").unwrap();
        let expected: UriRef = "https://example.org/next".into();

        let actual = UriRef::from("https://example.org/next").resolve(&base);

        assert_eq!(actual, expected);
    }

    #[test]
    fn resolve_against_opaque_base() {
        let base = Url::parse("mailto:joe@example.org").unwrap();
        let expected: UriRef = "/style.css".into();

        let actual = UriRef::from("/style.css").resolve(&base);

        assert_eq!(actual, expected);
    }

    #[test]
    fn resolve_empty_reference() {
        let base = Url::parse("http://test.com/page/3").unwrap();
        let expected: UriRef = "http://test.com/page/3".into();

        let actual = UriRef::from("").resolve(&base);

        assert_eq!(actual, expected);
    }
}
