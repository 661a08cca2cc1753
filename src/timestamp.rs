//! Decoded recording time.

use std::fmt;

use time::{
    format_description::BorrowedFormatItem,
    macros::format_description,
    OffsetDateTime,
    PrimitiveDateTime,
    UtcOffset,
};

/// `YYYY-MM-DD HH:MM:SS`
pub(crate) const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// `YYYY-MM-DD HH:MM:SS±HH:MM`
pub(crate) const DATETIME_OFFSET_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// `±HH:MM`
const OFFSET_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

/// Original recording time as embedded in the stream by the camera.
///
/// AVCHD streams also carry a UTC offset
/// (whole or half hours) and a daylight saving flag.
/// HDV streams carry local time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordingTime {
    pub(crate) datetime: PrimitiveDateTime,
    pub(crate) offset: Option<UtcOffset>,
    pub(crate) dst: Option<bool>,
}

impl RecordingTime {
    pub fn new(datetime: PrimitiveDateTime, offset: Option<UtcOffset>) -> Self {
        Self { datetime, offset, dst: None }
    }

    /// Parses `YYYY-MM-DD HH:MM:SS`.
    pub fn parse_local(text: &str) -> Option<Self> {
        PrimitiveDateTime::parse(text, DATETIME_FORMAT)
            .ok()
            .map(|dt| Self::new(dt, None))
    }

    /// Parses `YYYY-MM-DD HH:MM:SS±HH:MM`.
    pub fn parse_with_offset(text: &str) -> Option<Self> {
        OffsetDateTime::parse(text, DATETIME_OFFSET_FORMAT)
            .ok()
            .map(|dt| Self::new(PrimitiveDateTime::new(dt.date(), dt.time()), Some(dt.offset())))
    }

    pub(crate) fn with_dst(self, dst: bool) -> Self {
        Self { dst: Some(dst), ..self }
    }

    /// Local date and time, as set in the camera.
    pub fn datetime(&self) -> PrimitiveDateTime {
        self.datetime
    }

    /// UTC offset, if present in the stream.
    pub fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }

    /// Daylight saving flag, if present in the stream.
    /// Informational only, the UTC offset is not adjusted.
    pub fn dst(&self) -> Option<bool> {
        self.dst
    }

    /// Returns date time with UTC offset,
    /// or `None` if the stream has no offset.
    pub fn to_offset_datetime(&self) -> Option<OffsetDateTime> {
        self.offset.map(|offset| self.datetime.assume_offset(offset))
    }
}

impl fmt::Display for RecordingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = self.datetime.format(DATETIME_FORMAT).map_err(|_| fmt::Error)?;
        write!(f, "{dt}")?;
        if let Some(offset) = self.offset {
            let tz = offset.format(OFFSET_FORMAT).map_err(|_| fmt::Error)?;
            write!(f, "{tz}")?;
        }
        Ok(())
    }
}
