//! Pipeline trait.
use crate::error::Error;

/// A runnable sequence of processing steps.
///
/// Generic over the return type, so that pipelines can hand back
/// whatever they built (vocabularies, counts, reports).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
