// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::header::Header;
use crate::link::Link;
use pest::Parser;

#[derive(Parser)]
#[grammar = "rfc5988.pest"]
pub struct Rfc5988Parser;

/// Parses a full `Link` header value.
///
/// Links are split at every top-level `,`, even inside quoted strings, and
/// blank segments are dropped, so an empty or whitespace-only header yields
/// no links. Never fails.
pub fn parse(input: &str) -> Header {
    let rule = Rfc5988Parser::parse(Rule::header, input)
        .expect("the grammar accepts any input")
        .next()
        .unwrap();

    let mut links = vec![];

    for inner_pair in rule.into_inner() {
        match inner_pair.as_rule() {
            Rule::link => {
                if !inner_pair.as_str().trim().is_empty() {
                    links.push(Link::from_rule(inner_pair));
                }
            }

            Rule::EOI => (),

            _ => unreachable!(),
        }
    }

    Header { links }
}
