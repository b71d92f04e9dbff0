// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod header;
pub mod link;
pub mod param;
pub mod parser;
pub mod response;
pub mod uri;

pub use link::Link;
pub use parser::parse;
