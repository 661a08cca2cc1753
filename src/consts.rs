//! Transport stream constants shared by the AVCHD and HDV extractors.

/// Transport stream packet sync byte.
pub const SYNC_BYTE: u8 = 0x47;

/// BDAV packet length: 4 byte arrival time stamp + 188 byte TS packet.
pub const AVCHD_PACKET_LEN: usize = 192;
/// Plain MPEG-2 TS packet length.
pub const HDV_PACKET_LEN: usize = 188;

/// Packets read per chunk (AVCHD).
pub const AVCHD_CHUNK_PACKETS: usize = 100;
/// Packets read per chunk (HDV).
pub const HDV_CHUNK_PACKETS: usize = 5000;

/// Max number of packets scanned before giving up (AVCHD).
pub const AVCHD_MAX_PACKETS: usize = 1000;
/// Max number of packets scanned before giving up (HDV).
pub const HDV_MAX_PACKETS: usize = 50_000;

/// UUID `17ee8c60-f84d-11d9-8cd6-0800200c9a66` of the H.264 SEI
/// unregistered user data, followed by `MDPM`
/// ("Modified DV Pack Meta").
pub const MDPM_SIGNATURE: [u8; 20] = [
    0x17, 0xee, 0x8c, 0x60, 0xf8, 0x4d, 0x11, 0xd9, 0x8c, 0xd6, 0x08, 0x00, 0x20, 0x0c, 0x9a, 0x66, // UUID
    b'M', b'D', b'P', b'M',
];

/// Byte size of the MDPM date/time record.
pub const MDPM_DATETIME_LEN: usize = 10;

/// AVCHD payload search starts after the 4 byte arrival time stamp
/// and the 4 byte TS header.
pub const AVCHD_SEARCH_START: usize = 8;

/// PES start code for `private_stream_2` (stream id `0xBF`).
pub const PES_PRIVATE_STREAM_2: [u8; 4] = [0x00, 0x00, 0x01, 0xBF];

/// PID carrying the HDV auxiliary (date/time) PES packets.
pub const HDV_AUX_PID: u16 = 2065;

/// HDV search starts after the 4 byte TS header.
pub const HDV_SEARCH_START: usize = 4;

/// Bytes between the PES start code and the HDV date/time record:
/// 4 byte start code, 2 byte PES packet length, 36 bytes.
pub const HDV_DATETIME_OFFSET: usize = 42;

/// Byte size of the HDV date/time record.
pub const HDV_DATETIME_LEN: usize = 7;

/// Search window margin at the end of an HDV packet.
/// Start codes in the final 50 bytes are not considered.
pub const HDV_SEARCH_TAIL: usize = 50;

/// Number of HDV date matches discarded before one is returned.
/// The first one tends to belong to the previous scene.
pub const HDV_DEFAULT_SKIP: usize = 1;
