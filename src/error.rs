//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// A line of a JSONL file could not be parsed.
    /// `line` starts at 1.
    Parse {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },
    /// A line of a JSONL file is not valid UTF-8.
    Encoding { path: PathBuf, line: usize },
    Custom(String),
}

impl Error {
    /// Short kind label, used when reporting failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serde(_) | Error::Parse { .. } | Error::Encoding { .. } => "parse",
            Error::Custom(_) => "custom",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Parse { path, line, source } => {
                write!(f, "{:?}:{}: invalid record: {}", path, line, source)
            }
            Error::Encoding { path, line } => {
                write!(f, "{:?}:{}: invalid UTF-8", path, line)
            }
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}
