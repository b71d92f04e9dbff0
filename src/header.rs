// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::link::Link;
use std::fmt::{self, Display};

/// A collection of links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub links: Vec<Link>,
}

impl Display for Header {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let links: Vec<String> = self.links.iter().map(|link| link.header()).collect();

        write!(formatter, "{}", links.join(", "))
    }
}
