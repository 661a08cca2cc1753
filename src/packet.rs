//! Transport packet framing.
//!
//! Both supported containers are sequences of fixed size packets
//! with a sync byte `0x47` at a fixed position:
//! - AVCHD/BDAV (`.m2ts`, `.mts`): 192 bytes, 4 byte arrival time stamp
//!   precedes the TS header, sync byte at offset 4.
//! - HDV (`.m2t`): plain 188 byte TS packets, sync byte at offset 0.

use crate::{
    consts::{
        AVCHD_CHUNK_PACKETS,
        AVCHD_MAX_PACKETS,
        AVCHD_PACKET_LEN,
        HDV_CHUNK_PACKETS,
        HDV_MAX_PACKETS,
        HDV_PACKET_LEN,
        SYNC_BYTE,
    },
    support,
};

/// Packet framing and scan limits for a transport stream flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketLayout {
    /// Packet size in bytes.
    pub packet_len: usize,
    /// Position of the sync byte within a packet.
    pub sync_offset: usize,
    /// Number of packets read per chunk.
    pub chunk_packets: usize,
    /// Max number of packets to examine.
    pub max_packets: usize,
}

impl PacketLayout {
    /// 192 byte BDAV packets.
    pub const AVCHD: Self = Self {
        packet_len: AVCHD_PACKET_LEN,
        sync_offset: 4,
        chunk_packets: AVCHD_CHUNK_PACKETS,
        max_packets: AVCHD_MAX_PACKETS,
    };

    /// 188 byte MPEG-2 TS packets.
    pub const HDV: Self = Self {
        packet_len: HDV_PACKET_LEN,
        sync_offset: 0,
        chunk_packets: HDV_CHUNK_PACKETS,
        max_packets: HDV_MAX_PACKETS,
    };

    /// Size of read buffer in bytes.
    pub fn chunk_len(&self) -> usize {
        self.packet_len * self.chunk_packets
    }

    /// Same layout with a different packet ceiling.
    pub fn with_max_packets(self, max_packets: usize) -> Self {
        Self { max_packets, ..self }
    }

    /// Same layout with a different chunk size (in packets).
    /// A chunk always holds at least one packet.
    pub fn with_chunk_packets(self, chunk_packets: usize) -> Self {
        Self { chunk_packets: chunk_packets.max(1), ..self }
    }
}

/// Borrowed view of a single packet in the active read buffer.
#[derive(Debug, Clone, Copy)]
pub struct Packet<'a> {
    data: &'a [u8],
    index: usize,
    sync_offset: usize,
}

impl<'a> Packet<'a> {
    pub(crate) fn new(data: &'a [u8], index: usize, layout: &PacketLayout) -> Self {
        Self {
            data,
            index,
            sync_offset: layout.sync_offset,
        }
    }

    /// Raw packet bytes, including any prefix
    /// before the TS header.
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Zero based packet number within the stream.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Packet size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at the sync byte position.
    pub fn sync_byte(&self) -> u8 {
        self.data[self.sync_offset]
    }

    /// Returns `true` if the sync byte is `0x47`.
    pub fn is_synced(&self) -> bool {
        self.sync_byte() == SYNC_BYTE
    }

    /// 13-bit packet identifier from the TS header
    /// that follows the sync byte.
    pub fn pid(&self) -> u16 {
        let s = self.sync_offset;
        support::pid(self.data[s + 1], self.data[s + 2])
    }
}
