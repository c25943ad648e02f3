/*! Corpus processing

Each step reads its whole input, processes it in memory and writes a single JSON document:

- [normalize]: raw JSONL records to normalized records, counting characters along the way.
- [build_schema]: predicate vocabulary.
- [write_char_vocab]: character vocabulary from the accumulated [CharCounts].
- [merge]: concatenation of normalized datasets, with a record count check.
!*/
pub mod chars;
pub mod counts;
pub mod merge;
pub mod normalize;
pub mod schema;

pub use chars::{build_char_vocab, write_char_vocab, CharVocab};
pub use counts::CharCounts;
pub use merge::{merge, MergeReport};
pub use normalize::normalize;
pub use schema::build_schema;
