//! HDV (`.m2t`) recording date.
//!
//! HDV cameras write 188 byte MPEG-2 TS packets. Packets with PID 2065
//! carry auxiliary data as a `private_stream_2` PES packet (start code `00 00 01 BF`).
//! The recording time follows 42 bytes after the start code
//! (4 byte start code, 2 byte PES packet length, 36 bytes):
//!
//! | Byte | Content            |
//! |------|--------------------|
//! | 0    | Day, `& 0x3F`      |
//! | 1    | Month, `& 0x1F`    |
//! | 2    | Year (two digits)  |
//! | 3    | -                  |
//! | 4    | Second, `& 0x7F`   |
//! | 5    | Minute, `& 0x7F`   |
//! | 6    | Hour, `& 0x3F`     |
//!
//! All fields are BCD. The first date in a file often belongs to the
//! previously recorded scene, so by default one match is skipped.
//!
//! See: <https://github.com/MediaArea/MediaInfoLib/blob/master/Source/MediaInfo/Multiple/File_MpegPs.cpp>

use std::io::{Cursor, Read};

use binrw::{BinRead, BinReaderExt};
use tracing::{debug, trace};

use crate::{
    consts::{
        HDV_AUX_PID,
        HDV_DATETIME_LEN,
        HDV_DATETIME_OFFSET,
        HDV_DEFAULT_SKIP,
        HDV_SEARCH_START,
        HDV_SEARCH_TAIL,
        PES_PRIVATE_STREAM_2,
    },
    packet::{Packet, PacketLayout},
    parser::DateParser,
    reader::{PacketReader, ScanStep},
    support::{self, Digits},
    RecordingTime,
    TsError,
};

/// HDV date/time record (7 bytes), masks applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct HdvDateTime {
    #[br(map = |b: u8| b & 0x3F)]
    pub(crate) day: u8,
    #[br(map = |b: u8| b & 0x1F)]
    pub(crate) month: u8,
    pub(crate) year: u8,
    _unused: u8,
    #[br(map = |b: u8| b & 0x7F)]
    pub(crate) second: u8,
    #[br(map = |b: u8| b & 0x7F)]
    pub(crate) minute: u8,
    #[br(map = |b: u8| b & 0x3F)]
    pub(crate) hour: u8,
}

impl HdvDateTime {
    const DIGITS: Digits = Digits::Hex;

    /// Date time as `20YY-MM-DD HH:MM:SS`,
    /// before validation.
    pub fn to_text(&self) -> String {
        let d = Self::DIGITS;
        format!(
            "20{}-{}-{} {}:{}:{}",
            d.render(self.year),
            d.render(self.month),
            d.render(self.day),
            d.render(self.hour),
            d.render(self.minute),
            d.render(self.second),
        )
    }

    /// Validated recording time, or `None` if the
    /// record does not form a valid calendar date.
    pub fn recording_time(&self) -> Option<RecordingTime> {
        RecordingTime::parse_local(&self.to_text())
    }
}

/// Recording date extractor for HDV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hdv {
    layout: PacketLayout,
    /// Number of valid dates discarded
    /// before one is returned.
    skip: usize,
}

impl Default for Hdv {
    fn default() -> Self {
        Self::new()
    }
}

impl Hdv {
    /// Skips the first date found.
    pub fn new() -> Self {
        Self::with_skip(HDV_DEFAULT_SKIP)
    }

    /// Skips the first `skip` dates found.
    pub fn with_skip(skip: usize) -> Self {
        Self {
            layout: PacketLayout::HDV,
            skip,
        }
    }

    /// Use custom chunk size and/or packet ceiling.
    pub fn with_layout(self, layout: PacketLayout) -> Self {
        Self { layout, ..self }
    }

    pub fn layout(&self) -> &PacketLayout {
        &self.layout
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Returns offset of the date/time record in `packet`
    /// for the first `private_stream_2` start code
    /// after the 4 byte TS header.
    pub fn record_offset(packet: &[u8]) -> Option<usize> {
        let end = packet.len().checked_sub(HDV_SEARCH_TAIL)?;
        support::find_from(packet, &PES_PRIVATE_STREAM_2, HDV_SEARCH_START, end)
            .map(|pos| pos + HDV_DATETIME_OFFSET)
    }

    /// Raw date/time record in `packet`, if present.
    pub fn record(packet: &[u8]) -> Option<HdvDateTime> {
        let start = Self::record_offset(packet)?;
        let record = packet.get(start .. start + HDV_DATETIME_LEN)?;
        Cursor::new(record).read_be::<HdvDateTime>().ok()
    }

    /// Recording time from a single packet, regardless of PID.
    pub fn read_packet(packet: &[u8]) -> Option<RecordingTime> {
        let record = Self::record(packet)?;
        let time = record.recording_time();
        if time.is_none() {
            trace!("Invalid HDV date '{}'", record.to_text());
        }
        time
    }

    /// Recording time from a packet, if it is on the
    /// auxiliary data PID.
    fn read_aux_packet(packet: &Packet) -> Option<RecordingTime> {
        match packet.pid() == HDV_AUX_PID {
            true => Self::read_packet(packet.bytes()),
            false => None,
        }
    }
}

impl DateParser for Hdv {
    const EXTENSIONS: &'static [&'static str] = &["m2t"];

    /// Returns the valid recording time that follows
    /// the first `Hdv::skip()` valid ones,
    /// within `PacketLayout::max_packets` packets.
    fn read_date<R: Read>(&self, reader: R) -> Result<Option<RecordingTime>, TsError> {
        let mut rdr = PacketReader::new(reader, self.layout);
        let mut found = 0;

        let result = rdr.scan(|packet| {
            let Some(time) = Self::read_aux_packet(&packet) else {
                return ScanStep::Continue;
            };
            found += 1;
            match found > self.skip {
                true => {
                    debug!("HDV date {time} in packet {}", packet.index());
                    ScanStep::Done(time)
                }
                false => {
                    debug!("Skipping HDV date {time} in packet {} ({found}/{})", packet.index(), self.skip);
                    ScanStep::Continue
                }
            }
        })?;

        if result.is_none() {
            debug!("No HDV date after {found} match(es) in {} packets", rdr.packets_scanned());
        }

        Ok(result)
    }
}
