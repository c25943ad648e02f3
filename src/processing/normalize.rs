/*! Normalization

Turns a raw JSONL split (train or dev) into a JSON array of [Record]s, counting the characters of each text.

The [CharCounts] passed in is shared between splits: counts are first accumulated locally and only folded into it
once the output has been written, so that a failed split leaves the shared table as it was.
!*/
use std::path::Path;

use log::{debug, info};

use crate::error::Error;
use crate::io::{write_json, JsonLines, WriteMode};
use crate::processing::CharCounts;
use crate::record::{RawRecord, Record};

const PROGRESS_STEP: usize = 10_000;

/// Normalize records from `src`, write them to `dst` and add their characters to `chars`.
///
/// Records keep the order of the source file.
/// On error, nothing is written and `chars` is not modified.
pub fn normalize(src: &Path, dst: &Path, chars: &mut CharCounts) -> Result<Vec<Record>, Error> {
    info!("normalizing {:?}", src);
    let reader = JsonLines::<RawRecord>::from_path(src)?;

    let mut local = CharCounts::default();
    let mut records = Vec::new();
    for raw in reader {
        let raw = raw?;
        local.add_count(&raw.text);
        records.push(Record::from(raw));

        if records.len() % PROGRESS_STEP == 0 {
            debug!("{:?}: {} records", src, records.len());
        }
    }

    write_json(dst, &records, WriteMode::Truncate)?;
    chars.merge(local);

    info!(
        "{:?}: {} records written to {:?} ({} distinct chars so far)",
        src,
        records.len(),
        dst,
        chars.len()
    );
    Ok(records)
}
