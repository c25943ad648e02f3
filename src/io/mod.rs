/*!
# IO utilities

Line-delimited JSON reading and pretty JSON writing.

Input files hold one JSON object per line, output files are a single pretty-printed JSON document (4-space indentation, non-ASCII characters kept as-is).
!*/
pub mod reader;
pub mod writer;

pub use reader::{read_json, JsonLines};
pub use writer::{write_json, WriteMode};
