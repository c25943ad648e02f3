/*! Dataset merging

Concatenates normalized datasets (JSON arrays of records) into a single one, in the order sources are given,
then checks the number of merged records against an expected count.

Elements are copied as-is, extra fields and key order included. Each source has to be a JSON array.

A count mismatch is reported (see [MergeReport]) but does not undo the write.
!*/
use std::path::Path;

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::Error;
use crate::io::{read_json, write_json, WriteMode};

/// Outcome of the record count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    count: usize,
    expected: usize,
}

impl MergeReport {
    pub fn new(count: usize, expected: usize) -> Self {
        Self { count, expected }
    }

    /// Number of merged records.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn is_match(&self) -> bool {
        self.count == self.expected
    }
}

/// Merge `srcs` into `dst` and check that `expected` records have been written.
///
/// With [WriteMode::Append], an existing non-empty `dst` ends up holding more than one JSON document.
pub fn merge<P>(dst: &Path, srcs: &[P], expected: usize, mode: WriteMode) -> Result<MergeReport, Error>
where
    P: AsRef<Path>,
{
    let mut data: Vec<Value> = Vec::new();
    for src in srcs {
        let src = src.as_ref();
        let mut part: Vec<Value> = read_json(src)?;
        debug!("{:?}: {} records", src, part.len());
        data.append(&mut part);
    }

    write_json(dst, &data, mode)?;

    let report = MergeReport::new(data.len(), expected);
    if report.is_match() {
        info!(
            "{} records merged into {:?}: length matches",
            report.count(),
            dst
        );
    } else {
        warn!(
            "{} records merged into {:?}: length mismatch (expected {})",
            report.count(),
            dst,
            report.expected()
        );
    }
    Ok(report)
}
