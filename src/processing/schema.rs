/*! Predicate schema

Reads a schema JSONL file (one `{"predicate": ...}` object per line, other fields ignored)
and numbers the distinct predicates from `0`, in the order they are first seen.
!*/
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::io::{write_json, JsonLines, WriteMode};
use crate::record::SchemaEntry;
use crate::vocab::Vocabulary;

/// Build the predicate vocabulary from `src` and write it to `dst` as `[id_to_predicate, predicate_to_id]`.
pub fn build_schema(src: &Path, dst: &Path) -> Result<Vocabulary<String>, Error> {
    info!("building schema from {:?}", src);
    let predicates: Vec<String> = JsonLines::<SchemaEntry>::from_path(src)?
        .map_ok(|entry| entry.predicate)
        .collect::<Result<_, _>>()?;

    let nb_entries = predicates.len();
    let schema = Vocabulary::from_tokens(0, predicates.into_iter().unique());

    write_json(dst, &schema, WriteMode::Truncate)?;
    info!(
        "{} predicates ({} schema entries) written to {:?}",
        schema.len(),
        nb_entries,
        dst
    );
    Ok(schema)
}
