// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::link::{Link, Params};
use crate::parser::parse;
use url::Url;

/// The slice of an HTTP response that link lookup needs: header access and
/// an optional base URL for resolving relative targets.
///
/// Implement it for whatever response type the host application uses; the
/// crate never constructs responses itself.
pub trait Response {
    /// Value of the header with the given name, if present. The name is
    /// matched verbatim.
    fn header(&self, name: &str) -> Option<&str>;

    /// Base URL of the response.
    fn base_url(&self) -> Option<&Url>;
}

/// Links carried by the response `Link` header, relative targets resolved
/// against the response base URL. An absent header yields no links.
pub fn links(response: &impl Response) -> Vec<Link> {
    match response.header("Link") {
        Some(value) => parse(value)
            .links
            .into_iter()
            .map(|link| match response.base_url() {
                Some(base) => Link {
                    uri: link.uri.resolve(base),
                    parameters: link.parameters,
                },
                None => link,
            })
            .collect(),

        None => vec![],
    }
}

/// First link, in header order, whose params contain every required pair.
/// Extra params on the link are fine.
pub fn find_link(response: &impl Response, required: &Params) -> Option<Link> {
    links(response)
        .into_iter()
        .find(|link| contains_all(&link.parameters, required))
}

/// First link with the given relation type.
pub fn find_link_by_relation(response: &impl Response, relation: &str) -> Option<Link> {
    let mut required = Params::new();
    required.insert("rel".into(), relation.into());

    find_link(response, &required)
}

fn contains_all(parameters: &Params, required: &Params) -> bool {
    required
        .iter()
        .all(|(name, value)| parameters.get(name) == Some(value))
}
