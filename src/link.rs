// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::param::{strip_pair, Param};
use crate::parser::{Rfc5988Parser, Rule};
use crate::uri::UriRef;
use indexmap::IndexMap;
use pest::iterators::Pair;
use pest::Parser;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// Link params keyed by name, in first-encounter order.
pub type Params = IndexMap<String, String>;

/// A RFC 5988 link: a target URI reference plus its params.
///
/// The target is never validated and params are plain text, so any header
/// segment produces a `Link`. Whether it is meaningful is for the caller to
/// decide.
///
/// ## Examples
///
/// ```
/// use weblinking::Link;
///
/// let link = Link::parse("</style.css>; rel=\"stylesheet\"");
///
/// assert_eq!(link.uri.as_str(), "/style.css");
/// assert_eq!(link.relation_type(), Some("stylesheet"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub uri: UriRef,
    pub parameters: Params,
}

impl Link {
    pub fn new(uri: impl Into<UriRef>, parameters: Params) -> Link {
        Link {
            uri: uri.into(),
            parameters,
        }
    }

    /// Parses a single link value.
    ///
    /// Segments are split at every `;`, even inside quoted strings; `,` is
    /// ordinary text here. The first segment is the target, stripped of one
    /// enclosing `<` `>` pair; the rest are params merged with the first
    /// occurrence of a name winning over later ones. Never fails: malformed
    /// pieces are kept literal and an empty input yields an empty link.
    pub fn parse(input: &str) -> Link {
        let rule = Rfc5988Parser::parse(Rule::bare_link, input)
            .expect("the grammar accepts any input")
            .next()
            .unwrap();

        Link::from_rule(rule)
    }

    pub(crate) fn from_rule(pair: Pair<Rule>) -> Link {
        let mut uri = UriRef::from("");
        let mut parameters = Params::new();

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::target | Rule::bare_target => {
                    uri = strip_pair(inner_pair.as_str().trim(), '<', '>').into();
                }

                Rule::param | Rule::bare_param => {
                    let param = Param::parse(inner_pair.as_str());

                    parameters
                        .entry(param.name.to_string())
                        .or_insert_with(|| param.value.to_string());
                }

                Rule::EOI => (),

                _ => unreachable!(),
            }
        }

        Link { uri, parameters }
    }

    /// Relation type of the link, the `rel` param.
    pub fn relation_type(&self) -> Option<&str> {
        self.parameter("rel")
    }

    /// Reverse relation of the link, the `rev` param.
    pub fn reverse_relation_type(&self) -> Option<&str> {
        self.parameter("rev")
    }

    /// A hint of the media type of the target, the `type` param.
    pub fn media_type(&self) -> Option<&str> {
        self.parameter("type")
    }

    fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Encodes the link as a `Link` header value, params in map order.
    pub fn header(&self) -> String {
        let mut pieces = vec![format!("<{}>", self.uri)];

        for (name, value) in &self.parameters {
            pieces.push(format!("{}=\"{}\"", name, value));
        }

        pieces.join("; ")
    }

    /// Encodes the link as an HTML `<link>` element, params first, `href`
    /// last.
    pub fn html(&self) -> String {
        let mut attributes: Vec<String> = self
            .parameters
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value))
            .collect();

        attributes.push(format!("href=\"{}\"", self.uri));

        format!("<link {} />", attributes.join(" "))
    }
}

// The hash covers the target only, so links differing in params alone land
// in the same bucket while still comparing unequal.
impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.header())
    }
}
