//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use relprep::config::VocabSource;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "relprep", about = "relation extraction dataset preparation tool.")]
/// Holds every command that is callable by the `relprep` command.
pub enum Relprep {
    #[structopt(about = "Build schema and char vocabularies, normalize train/dev splits")]
    Prepare(Prepare),
    #[structopt(about = "Merge normalized datasets")]
    Merge(Merge),
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
///
/// ```sh
/// relprep-prepare 0.1.0
/// Build schema and char vocabularies, normalize train/dev splits
///
/// USAGE:
///     relprep prepare [OPTIONS]
///
/// OPTIONS:
///     -c, --config <config>           JSON file holding the input/output paths
///     -d, --datasets <datasets>       datasets folder, used when no config is given [default: datasets]
///     -e, --expected <expected>       expected number of merged records
///         --merge-out <merge-out>     merge normalized train and dev splits there
///         --min-count <min-count>     [default: 2]
///         --vocab-source <vocab-source>
///             chars that get an id: `all` of them, or only `filtered` ones [default: all]
/// ```
pub struct Prepare {
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "JSON file holding the input/output paths"
    )]
    pub config: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "datasets",
        help = "datasets folder, used when no config is given",
        default_value = "datasets"
    )]
    pub datasets: PathBuf,
    #[structopt(
        long = "min-count",
        help = "minimum count of a char to be kept in the filtered view",
        default_value = "2"
    )]
    pub min_count: u64,
    #[structopt(
        long = "vocab-source",
        help = "chars that get an id: `all` of them, or only `filtered` ones (seen at least min-count times)",
        default_value = "all"
    )]
    pub vocab_source: VocabSource,
    #[structopt(
        parse(from_os_str),
        long = "merge-out",
        help = "merge normalized train and dev splits there"
    )]
    pub merge_out: Option<PathBuf>,
    #[structopt(
        short = "e",
        long = "expected",
        help = "expected number of merged records. Defaults to the number of normalized records."
    )]
    pub expected: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Merge command and parameters.
pub struct Merge {
    #[structopt(parse(from_os_str), help = "merged dataset destination")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), required = true, help = "normalized datasets")]
    pub srcs: Vec<PathBuf>,
    #[structopt(short = "e", long = "expected", help = "expected number of merged records")]
    pub expected: usize,
    #[structopt(
        short = "a",
        long = "append",
        help = "append to dst instead of replacing it (yields invalid JSON if dst is not empty)"
    )]
    pub append: bool,
}
