/*! Reading utilities

- [JsonLines] iterates over typed records of a JSONL file, keeping track of line numbers for error reporting.
- [read_json] loads a whole JSON document.
!*/
mod jsonl;

pub use jsonl::{read_json, JsonLines};
