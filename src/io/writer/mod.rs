/*! Writing utilities

Every output of the crate is a single JSON document written by [write_json].
!*/
mod json;

pub use json::{to_writer_pretty, write_json, WriteMode};
