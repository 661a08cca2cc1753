//! AVCHD (`.m2ts`, `.mts`) recording date.
//!
//! AVCHD cameras write 192 byte BDAV packets. The recording time is part of
//! the Modified DV Pack Metadata (MDPM), stored as H.264 SEI unregistered user data
//! with UUID `17ee8c60-f84d-11d9-8cd6-0800200c9a66`, directly followed by `MDPM`.
//!
//! After `MDPM` and a one byte tag count, the date/time record is laid out as:
//!
//! | Byte | Content                                        |
//! |------|------------------------------------------------|
//! | 0    | Tag `0x18` (year, month)                       |
//! | 1    | Time zone: `0x40` DST, `0x20` sign, `0x1e` hours, `0x01` half hour |
//! | 2-3  | Year, BCD                                      |
//! | 4    | Month, BCD                                     |
//! | 5    | Tag `0x19` (day, time)                         |
//! | 6-9  | Day, hour, minute, second, BCD                 |
//!
//! See:
//! - <https://github.com/exiftool/exiftool/blob/master/lib/Image/ExifTool/H264.pm>
//! - <http://hirntier.blogspot.com/2010/02/avchd-timecode-update.html>

use std::io::{Cursor, Read};

use binrw::{BinRead, BinReaderExt};
use tracing::{debug, trace};

use crate::{
    consts::{AVCHD_SEARCH_START, MDPM_DATETIME_LEN, MDPM_SIGNATURE},
    packet::PacketLayout,
    parser::DateParser,
    reader::{PacketReader, ScanStep},
    support::{self, Digits},
    RecordingTime,
    TsError,
};

/// MDPM date/time record (10 bytes).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct MdpmDateTime {
    _date_tag: u8,
    pub(crate) timezone: u8,
    pub(crate) year: [u8; 2],
    pub(crate) month: u8,
    _time_tag: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
}

impl MdpmDateTime {
    /// Field rendering. Valid BCD bytes are used as is.
    const DIGITS: Digits = Digits::BcdOrBinary;

    /// Raw time zone byte.
    pub fn timezone(&self) -> u8 {
        self.timezone
    }

    /// UTC offset is negative.
    pub fn tz_negative(&self) -> bool {
        self.timezone & 0x20 == 0x20
    }

    /// UTC offset has an additional 30 minutes.
    pub fn tz_half_hour(&self) -> bool {
        self.timezone & 0x01 == 0x01
    }

    /// Whole hours of UTC offset (0-15).
    pub fn tz_hours(&self) -> u8 {
        self.timezone >> 1 & 0x0F
    }

    /// Daylight saving time flag.
    pub fn dst(&self) -> bool {
        self.timezone & 0x40 == 0x40
    }

    /// Date time as `YYYY-MM-DD HH:MM:SS±HH:MM`,
    /// before validation.
    pub fn to_text(&self) -> String {
        let d = Self::DIGITS;
        format!(
            "{}{}-{}-{} {}:{}:{}{}{:02}:{}",
            d.render(self.year[0]),
            d.render(self.year[1]),
            d.render(self.month),
            d.render(self.day),
            d.render(self.hour),
            d.render(self.minute),
            d.render(self.second),
            if self.tz_negative() { "-" } else { "+" },
            self.tz_hours(),
            if self.tz_half_hour() { "30" } else { "00" },
        )
    }

    /// Validated recording time, or `None` if the
    /// record does not form a valid calendar date.
    pub fn recording_time(&self) -> Option<RecordingTime> {
        RecordingTime::parse_with_offset(&self.to_text())
            .map(|t| t.with_dst(self.dst()))
    }
}

/// Recording date extractor for AVCHD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avchd {
    layout: PacketLayout,
}

impl Default for Avchd {
    fn default() -> Self {
        Self::new()
    }
}

impl Avchd {
    pub fn new() -> Self {
        Self::with_layout(PacketLayout::AVCHD)
    }

    /// Use custom chunk size and/or packet ceiling.
    pub fn with_layout(layout: PacketLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &PacketLayout {
        &self.layout
    }

    /// Returns offset of the date/time record in `packet`,
    /// i.e. one byte after `MDPM`, if the signature is present.
    ///
    /// The search skips the 4 byte arrival time stamp and
    /// the 4 byte TS header, and only considers positions
    /// where the full record fits in the packet.
    pub fn mdpm_offset(packet: &[u8]) -> Option<usize> {
        let end = packet.len().checked_sub(MDPM_SIGNATURE.len() + MDPM_DATETIME_LEN)?;
        support::find_from(packet, &MDPM_SIGNATURE, AVCHD_SEARCH_START, end)
            .map(|pos| pos + MDPM_SIGNATURE.len() + 1)
    }

    /// Raw date/time record in `packet`, if present.
    pub fn mdpm(packet: &[u8]) -> Option<MdpmDateTime> {
        let start = Self::mdpm_offset(packet)?;
        let record = packet.get(start .. start + MDPM_DATETIME_LEN)?;
        Cursor::new(record).read_be::<MdpmDateTime>().ok()
    }

    /// Recording time from a single packet.
    pub fn read_packet(packet: &[u8]) -> Option<RecordingTime> {
        let mdpm = Self::mdpm(packet)?;
        let time = mdpm.recording_time();
        if time.is_none() {
            trace!("Invalid MDPM date '{}'", mdpm.to_text());
        }
        time
    }
}

impl DateParser for Avchd {
    const EXTENSIONS: &'static [&'static str] = &["m2ts", "mts"];

    /// Returns the first valid MDPM recording time
    /// within `PacketLayout::max_packets` packets.
    fn read_date<R: Read>(&self, reader: R) -> Result<Option<RecordingTime>, TsError> {
        let mut rdr = PacketReader::new(reader, self.layout);

        let result = rdr.scan(|packet| match Self::read_packet(packet.bytes()) {
            Some(time) => {
                debug!("MDPM date {time} in packet {}", packet.index());
                ScanStep::Done(time)
            }
            None => ScanStep::Continue,
        })?;

        if result.is_none() {
            debug!("No MDPM date in {} packets", rdr.packets_scanned());
        }

        Ok(result)
    }
}
