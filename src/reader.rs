//! Chunked, bounded packet reader.
//!
//! Reads a byte source front to back in chunks of whole packets,
//! validates the sync byte of each packet and hands it to a callback
//! until the callback is done, the packet ceiling is reached,
//! or the source is exhausted. Never seeks.

use std::io::{ErrorKind, Read};

use tracing::{trace, warn};

use crate::{
    packet::{Packet, PacketLayout},
    TsError,
};

/// Returned by the per-packet callback in `PacketReader::scan()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStep<T> {
    /// Keep scanning.
    Continue,
    /// Stop scanning and return value.
    Done(T),
}

/// Reader over a transport stream,
/// with a read buffer sized to hold `PacketLayout::chunk_packets`
/// packets.
#[derive(Debug)]
pub struct PacketReader<R: Read> {
    /// Byte source, consumed sequentially.
    reader: R,
    /// Packet framing and limits.
    layout: PacketLayout,
    /// Read buffer, reused for every chunk.
    buffer: Vec<u8>,
    /// Number of packets examined so far.
    packets: usize,
    /// Number of bytes consumed from `reader`.
    bytes: u64,
}

impl<R: Read> PacketReader<R> {
    pub fn new(reader: R, layout: PacketLayout) -> Self {
        Self {
            reader,
            buffer: vec![0_u8; layout.chunk_len()],
            layout,
            packets: 0,
            bytes: 0,
        }
    }

    /// Packet layout in use.
    pub fn layout(&self) -> &PacketLayout {
        &self.layout
    }

    /// Number of packets examined so far.
    pub fn packets_scanned(&self) -> usize {
        self.packets
    }

    /// Number of bytes read from the source so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes
    }

    /// Returns the underlying byte source.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Fills the read buffer from the byte source.
    /// Keeps reading until the buffer is full or
    /// a zero-length read signals end of input,
    /// so that short reads do not break packet alignment.
    ///
    /// Returns number of bytes in buffer.
    fn fill(&mut self) -> Result<usize, TsError> {
        let mut filled = 0;
        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
        self.bytes += filled as u64;
        trace!("Read chunk of {filled} bytes ({} bytes total)", self.bytes);
        Ok(filled)
    }

    /// Runs `on_packet` for each packet in the stream, in order.
    ///
    /// - Returns `Ok(Some(T))` as soon as `on_packet` returns `ScanStep::Done(T)`.
    /// - Returns `Ok(None)` if the source is exhausted or
    ///   `PacketLayout::max_packets` packets have been examined.
    /// - Returns `Err(TsError::SyncByte)` for the first packet
    ///   with a sync byte other than `0x47`. No further packets are examined.
    ///
    /// A trailing fragment shorter than one packet is ignored.
    pub fn scan<T, F>(&mut self, mut on_packet: F) -> Result<Option<T>, TsError>
    where
        F: FnMut(Packet<'_>) -> ScanStep<T>,
    {
        let layout = self.layout;

        while self.packets < layout.max_packets {
            let len = self.fill()?;
            if len == 0 {
                break;
            }

            for data in self.buffer[..len].chunks_exact(layout.packet_len) {
                if self.packets >= layout.max_packets {
                    break;
                }

                let packet = Packet::new(data, self.packets, &layout);
                if !packet.is_synced() {
                    let err = TsError::SyncByte {
                        packet: packet.index(),
                        offset: packet.index() * layout.packet_len + layout.sync_offset,
                        got: packet.sync_byte(),
                    };
                    warn!("{err}");
                    return Err(err);
                }

                self.packets += 1;

                if let ScanStep::Done(value) = on_packet(packet) {
                    return Ok(Some(value));
                }
            }

            // Short chunk means the source is exhausted
            if len < self.buffer.len() {
                break;
            }
        }

        trace!("Scan ended after {} packets", self.packets);

        Ok(None)
    }
}
