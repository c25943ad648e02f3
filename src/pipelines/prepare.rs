//! Dataset preparation pipeline
//!
//! # Processing
//! 1. The schema file is turned into the predicate vocabulary.
//! 1. The train split is normalized, its characters counted.
//! 1. The dev split is normalized, its characters added to the same counts.
//! 1. The character vocabulary is built from the counts.
//! 1. If asked to, the normalized train and dev splits are merged.
//!
//! A failing step does not stop the pipeline: the error is logged and kept in the [Report],
//! and the next steps still run.
use std::fmt;
use std::path::PathBuf;

use log::{error, info};

use crate::config::{PathConfig, VocabOptions};
use crate::error::Error;
use crate::io::WriteMode;
use crate::processing::{
    build_schema, merge, normalize, write_char_vocab, CharCounts, CharVocab, MergeReport,
};
use crate::vocab::Vocabulary;

use super::Pipeline;

/// Pipeline steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Schema,
    Train,
    Dev,
    Chars,
    Merge,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Schema => "schema",
            Stage::Train => "train",
            Stage::Dev => "dev",
            Stage::Chars => "chars",
            Stage::Merge => "merge",
        };
        write!(f, "{}", name)
    }
}

/// What a preparation run produced, and what failed.
#[derive(Debug, Default)]
pub struct Report {
    failures: Vec<(Stage, Error)>,
    schema: Option<Vocabulary<String>>,
    chars: Option<CharVocab>,
    nb_records: usize,
    merge: Option<MergeReport>,
}

impl Report {
    /// Log and keep the error if there's one.
    fn absorb<T>(&mut self, stage: Stage, result: Result<T, Error>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                error!("[{}] {} error: {}", stage, e.kind(), e);
                self.failures.push((stage, e));
                None
            }
        }
    }

    /// `true` if every step succeeded.
    ///
    /// A merge count mismatch is not a failure. See [Report::merge].
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[(Stage, Error)] {
        &self.failures
    }

    pub fn failed(&self, stage: Stage) -> bool {
        self.failures.iter().any(|(s, _)| *s == stage)
    }

    pub fn schema(&self) -> Option<&Vocabulary<String>> {
        self.schema.as_ref()
    }

    pub fn chars(&self) -> Option<&CharVocab> {
        self.chars.as_ref()
    }

    /// Number of records normalized over the successful splits.
    pub fn nb_records(&self) -> usize {
        self.nb_records
    }

    pub fn merge(&self) -> Option<&MergeReport> {
        self.merge.as_ref()
    }

    /// Turn a report with failures into an error.
    pub fn into_result(self) -> Result<Self, Error> {
        if self.is_ok() {
            Ok(self)
        } else {
            let stages: Vec<String> = self.failures.iter().map(|(s, _)| s.to_string()).collect();
            Err(Error::Custom(format!(
                "Errors occurred during preparation ({}): see previous messages.",
                stages.join(", ")
            )))
        }
    }
}

#[derive(Debug, Clone)]
struct MergeTarget {
    dst: PathBuf,
    expected: Option<usize>,
    mode: WriteMode,
}

pub struct Prepare {
    paths: PathConfig,
    vocab: VocabOptions,
    merge: Option<MergeTarget>,
}

impl Prepare {
    pub fn new(paths: PathConfig, vocab: VocabOptions) -> Self {
        Self {
            paths,
            vocab,
            merge: None,
        }
    }

    /// Merge normalized train and dev splits into `dst` once done.
    ///
    /// If `expected` is not set, the merged length is checked against the number of records normalized by the run.
    pub fn with_merge(mut self, dst: PathBuf, expected: Option<usize>, mode: WriteMode) -> Self {
        self.merge = Some(MergeTarget {
            dst,
            expected,
            mode,
        });
        self
    }

    /// Run every step, absorbing failures into the returned [Report].
    pub fn report(&self) -> Report {
        let mut report = Report::default();
        let paths = &self.paths;

        // character counts live for the duration of the run only
        let mut chars = CharCounts::default();

        let schema = build_schema(&paths.schema_in_path, &paths.schema_out_path);
        report.schema = report.absorb(Stage::Schema, schema);

        let splits = [
            (Stage::Train, &paths.train_in_path, &paths.train_out_path),
            (Stage::Dev, &paths.dev_in_path, &paths.dev_out_path),
        ];
        for (stage, src, dst) in splits {
            let records = normalize(src, dst, &mut chars);
            if let Some(records) = report.absorb(stage, records) {
                report.nb_records += records.len();
            }
        }

        let char_vocab = write_char_vocab(&chars, &paths.chars_out_path, &self.vocab);
        report.chars = report.absorb(Stage::Chars, char_vocab);

        if let Some(target) = &self.merge {
            let expected = target.expected.unwrap_or(report.nb_records);
            let srcs = [&paths.train_out_path, &paths.dev_out_path];
            let merged = merge(&target.dst, &srcs, expected, target.mode);
            report.merge = report.absorb(Stage::Merge, merged);
        }

        info!(
            "preparation done: {} records, {} failed steps",
            report.nb_records,
            report.failures.len()
        );
        report
    }
}

impl Pipeline<Report> for Prepare {
    /// Run every step. Fails if at least one of them did, after all of them ran.
    fn run(&self) -> Result<Report, Error> {
        self.report().into_result()
    }
}
