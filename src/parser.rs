//! Recording date parsers and selection by file extension.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use tracing::debug;

use crate::{Avchd, Hdv, RecordingTime, TsError};

/// Extracts the recording time from a transport stream.
pub trait DateParser {
    /// Supported file extensions, lower case, without leading `.`.
    const EXTENSIONS: &'static [&'static str];

    /// Reads `reader` front to back until a recording time is found.
    ///
    /// - `Ok(Some(_))`: recording time found.
    /// - `Ok(None)`: no recording time found (not an error).
    /// - `Err(TsError::SyncByte{..})`: stream is not aligned to packets.
    /// - `Err(TsError::IOError(_))`: reading `reader` failed.
    fn read_date<R: Read>(&self, reader: R) -> Result<Option<RecordingTime>, TsError>;

    /// Returns `true` if `ext` (with or without leading `.`)
    /// is a supported file extension. Case insensitive.
    fn supports(ext: &str) -> bool {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Parser selected for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parser {
    /// `.m2ts`, `.mts`
    Avchd(Avchd),
    /// `.m2t`
    Hdv(Hdv),
}

impl Parser {
    /// Returns parser for file extension `ext`
    /// (with or without leading `.`, case insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        if Avchd::supports(ext) {
            Some(Self::Avchd(Avchd::new()))
        } else if Hdv::supports(ext) {
            Some(Self::Hdv(Hdv::new()))
        } else {
            None
        }
    }

    /// Returns parser for the file extension of `path`.
    pub fn from_path(path: &Path) -> Result<Self, TsError> {
        let ext = path.extension()
            .ok_or_else(|| TsError::NoExtension(path.to_owned()))?
            .to_string_lossy();
        Self::from_extension(&ext)
            .ok_or_else(|| TsError::UnsupportedExtension(ext.into_owned()))
    }

    /// Sets number of HDV dates to skip. No effect for AVCHD.
    pub fn with_hdv_skip(self, skip: usize) -> Self {
        match self {
            Self::Hdv(hdv) => Self::Hdv(Hdv::with_skip(skip).with_layout(*hdv.layout())),
            avchd => avchd,
        }
    }

    /// Short name for the stream flavour.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Avchd(_) => "AVCHD",
            Self::Hdv(_) => "HDV",
        }
    }

    /// Reads recording time from `reader` using the selected parser.
    pub fn read_date<R: Read>(&self, reader: R) -> Result<Option<RecordingTime>, TsError> {
        match self {
            Self::Avchd(p) => p.read_date(reader),
            Self::Hdv(p) => p.read_date(reader),
        }
    }

    /// Opens `path` and reads its recording time.
    pub fn read_file(&self, path: &Path) -> Result<Option<RecordingTime>, TsError> {
        let file = File::open(path)?;
        debug!("Reading {} as {}", path.display(), self.name());
        self.read_date(BufReader::new(file))
    }
}

/// Reads recording time from the file at `path`,
/// selecting parser by file extension.
pub fn read_date(path: &Path) -> Result<Option<RecordingTime>, TsError> {
    Parser::from_path(path)?.read_file(path)
}
