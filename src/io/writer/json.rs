use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Error;

const INDENT: &[u8] = b"    ";

/// How an existing destination file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace previous content.
    #[default]
    Truncate,
    /// Write after previous content.
    ///
    /// Writing a JSON document after an existing one does not yield valid JSON.
    Append,
}

/// Serialize `value` with a 4-space indentation into `writer`.
///
/// Non-ASCII characters are written as-is.
pub fn to_writer_pretty<W, T>(writer: W, value: &T) -> Result<(), Error>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

/// Write `value` as a pretty JSON document at `dst`, creating the file if needed.
pub fn write_json<T>(dst: &Path, value: &T, mode: WriteMode) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Truncate => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    debug!("writing {:?} ({:?})", dst, mode);
    let f = options.open(dst)?;
    let mut bw = BufWriter::new(f);
    to_writer_pretty(&mut bw, value)?;
    bw.flush()?;
    Ok(())
}
