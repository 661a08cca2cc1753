//! Various transport stream related errors.

use std::{fmt, path::PathBuf};

/// Transport stream read/parse errors.
///
/// Failing to locate a date is not an error,
/// see `DateParser::read_date()`.
#[derive(Debug)]
pub enum TsError {
    /// Sync byte `0x47` missing at expected position.
    /// Stream alignment is considered broken from here on.
    SyncByte{packet: usize, offset: usize, got: u8},
    /// IO error
    IOError(std::io::Error),
    /// Path has no file extension.
    NoExtension(PathBuf),
    /// No parser available for file extension.
    UnsupportedExtension(String),
}

impl std::error::Error for TsError {}

impl fmt::Display for TsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsError::SyncByte{packet, offset, got} => write!(f, "TS packet sync byte 0x47 not found (packet {packet}, byte offset {offset}, got 0x{got:02x})"),
            TsError::IOError(err) => write!(f, "IO error: {}", err),
            TsError::NoExtension(path) => write!(f, "No file extension for '{}'", path.display()),
            TsError::UnsupportedExtension(ext) => write!(f, "No parser available for .{ext}"),
        }
    }
}

/// Converts std::io::Error to TsError
impl From<std::io::Error> for TsError {
    fn from(err: std::io::Error) -> Self {
        TsError::IOError(err)
    }
}

/// Converts TsError to std::io::Error
impl From<TsError> for std::io::Error {
    fn from(err: TsError) -> Self {
        match err {
            TsError::IOError(err) => err,
            other => std::io::Error::new(std::io::ErrorKind::Other, other.to_string()),
        }
    }
}
