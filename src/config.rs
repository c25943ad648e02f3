//! Pipeline configuration: file locations and vocabulary options.
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::read_json;

/// Name of the merged train+dev dataset, relative to the datasets folder.
pub const MERGE_OUT_NAME: &str = "train_data_vote_me.json";

/// Default minimum count for a character to be kept in the filtered view.
pub const DEFAULT_MIN_COUNT: u64 = 2;

/// Input and output locations of a preparation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    pub schema_in_path: PathBuf,
    pub schema_out_path: PathBuf,
    pub train_in_path: PathBuf,
    pub train_out_path: PathBuf,
    pub dev_in_path: PathBuf,
    pub dev_out_path: PathBuf,
    pub chars_out_path: PathBuf,
}

impl PathConfig {
    /// Conventional file names inside a datasets folder.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            schema_in_path: dir.join("all_50_schemas"),
            schema_out_path: dir.join("all_50_schemas_me.json"),
            train_in_path: dir.join("train_data.json"),
            train_out_path: dir.join("train_data_me.json"),
            dev_in_path: dir.join("dev_data.json"),
            dev_out_path: dir.join("dev_data_me.json"),
            chars_out_path: dir.join("all_chars_me.json"),
        }
    }

    /// Load a configuration from a JSON object holding the seven paths.
    pub fn from_file(src: &Path) -> Result<Self, Error> {
        read_json(src)
    }
}

/// Which character table ids are assigned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabSource {
    /// Every character seen, whatever its count.
    #[default]
    All,
    /// Only characters seen at least `min_count` times.
    Filtered,
}

impl FromStr for VocabSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "filtered" => Ok(Self::Filtered),
            other => Err(Error::Custom(format!("unknown vocabulary source: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabOptions {
    pub min_count: u64,
    pub source: VocabSource,
}

impl Default for VocabOptions {
    fn default() -> Self {
        Self {
            min_count: DEFAULT_MIN_COUNT,
            source: VocabSource::default(),
        }
    }
}
