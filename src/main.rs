//! # relprep
//!
//! Prepares relation extraction corpora: predicate schema, character vocabulary,
//! normalized train/dev splits and merged datasets.
//!
//! ## Getting started
//!
//! ```sh
//! relprep 0.1.0
//! relation extraction dataset preparation tool.
//!
//! USAGE:
//!     relprep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help       Prints this message or the help of the given subcommand(s)
//!     merge      Merge normalized datasets
//!     prepare    Build schema and char vocabularies, normalize train/dev splits
//! ```
//!
//! Set `RUST_LOG=info` to follow progress.
use relprep::config::{PathConfig, VocabOptions};
use relprep::error::Error;
use relprep::io::WriteMode;
use relprep::pipelines::{Pipeline, Prepare};
use relprep::processing::merge;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Relprep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Relprep::Prepare(p) => {
            let paths = match p.config {
                Some(config) => PathConfig::from_file(&config)?,
                None => PathConfig::from_dir(&p.datasets),
            };
            debug!("paths\n{:#?}", paths);

            let vocab = VocabOptions {
                min_count: p.min_count,
                source: p.vocab_source,
            };

            let mut pipeline = Prepare::new(paths, vocab);
            if let Some(dst) = p.merge_out {
                pipeline = pipeline.with_merge(dst, p.expected, WriteMode::Truncate);
            }
            pipeline.run()?;
        }

        cli::Relprep::Merge(m) => {
            let mode = if m.append {
                WriteMode::Append
            } else {
                WriteMode::Truncate
            };
            let report = merge(&m.dst, &m.srcs, m.expected, mode)?;
            println!("{}", report.count());
            if report.is_match() {
                println!("length matches");
            } else {
                println!("length mismatch (expected {})", report.expected());
            }
        }
    };
    Ok(())
}
