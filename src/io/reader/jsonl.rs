use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines, Read};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::Error;

/// Iterates over records of a JSONL source.
///
/// One record per line, blank lines included: a blank line is a parse failure.
/// Each parse failure is reported as an [Error::Parse] holding the path and the (1-based) line number.
#[derive(Debug)]
pub struct JsonLines<T, R = File>
where
    R: Read,
{
    lines: Lines<BufReader<R>>,
    path: PathBuf,
    line: usize,
    item: PhantomData<T>,
}

impl<T> JsonLines<T, File> {
    /// Open the file at `src`.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handler = File::open(src)?;
        Ok(Self::new(handler, src))
    }
}

impl<T, R> JsonLines<T, R>
where
    R: Read,
{
    /// `path` is only used in error messages.
    pub fn new(inner: R, path: &Path) -> Self {
        Self {
            lines: BufReader::new(inner).lines(),
            path: path.to_path_buf(),
            line: 0,
            item: PhantomData,
        }
    }
}

impl<T, R> Iterator for JsonLines<T, R>
where
    T: DeserializeOwned,
    R: Read,
{
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line += 1;

        let line = match line {
            Ok(line) => line,
            // lines() reports invalid UTF-8 as InvalidData
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Some(Err(Error::Encoding {
                    path: self.path.clone(),
                    line: self.line,
                }))
            }
            Err(e) => return Some(Err(Error::Io(e))),
        };

        Some(
            serde_json::from_str::<T>(&line).map_err(|source| Error::Parse {
                path: self.path.clone(),
                line: self.line,
                source,
            }),
        )
    }
}

/// Load a whole JSON document from `src`.
pub fn read_json<T: DeserializeOwned>(src: &Path) -> Result<T, Error> {
    let f = File::open(src)?;
    let br = BufReader::new(f);
    Ok(serde_json::from_reader(br)?)
}
