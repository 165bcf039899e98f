#![allow(dead_code)]

pub mod parse_helpers;
pub mod source_fixtures;
