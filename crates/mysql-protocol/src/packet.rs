//! MySQL packet framing.
//!
//! Every packet begins with a 4-byte header:
//! - 3 bytes: payload length (little-endian)
//! - 1 byte: sequence id
//!
//! A payload longer than [`MAX_PAYLOAD_SIZE`] is split across several
//! packets. A payload whose length is an exact multiple of the maximum
//! (including zero) ends with an empty packet so the server can tell
//! where the message stops.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::buffer::BufferAllocator;
use crate::error::ProtocolError;
use crate::message::ClientMessage;
use crate::session::Session;

/// Packet header size in bytes.
pub const PACKET_HEADER_SIZE: usize = 4;

/// Maximum payload carried by a single packet (2^24 - 1).
pub const MAX_PAYLOAD_SIZE: usize = 0xFF_FFFF;

/// Packet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    /// Payload length, excluding the header. At most [`MAX_PAYLOAD_SIZE`].
    pub length: u32,
    /// Packet sequence number (wraps at 255).
    pub sequence_id: u8,
}

impl PacketHeader {
    /// Create a header for a payload of `length` bytes.
    pub fn new(length: usize, sequence_id: u8) -> Result<Self, ProtocolError> {
        if length > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooLarge {
                size: length,
                max: MAX_PAYLOAD_SIZE,
            });
        }

        Ok(Self {
            length: length as u32,
            sequence_id,
        })
    }

    /// Parse a packet header from bytes.
    pub fn decode(src: &mut impl Buf) -> Result<Self, ProtocolError> {
        if src.remaining() < PACKET_HEADER_SIZE {
            return Err(ProtocolError::IncompletePacket {
                expected: PACKET_HEADER_SIZE,
                actual: src.remaining(),
            });
        }

        let length = src.get_uint_le(3) as u32;
        let sequence_id = src.get_u8();

        Ok(Self {
            length,
            sequence_id,
        })
    }

    /// Encode the packet header to bytes.
    pub fn encode(&self, dst: &mut impl BufMut) {
        dst.put_uint_le(u64::from(self.length), 3);
        dst.put_u8(self.sequence_id);
    }

    /// Encode the packet header to a new `Bytes` buffer.
    #[must_use]
    pub fn encode_to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(PACKET_HEADER_SIZE);
        self.encode(&mut buf);
        buf.freeze()
    }

    /// Get the payload length.
    #[must_use]
    pub const fn payload_length(&self) -> usize {
        self.length as usize
    }

    /// Check if more packets of the same message follow this one.
    #[must_use]
    pub const fn has_continuation(&self) -> bool {
        self.payload_length() == MAX_PAYLOAD_SIZE
    }
}

/// Per-connection packet sequence counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceId(u8);

impl SequenceId {
    /// Create a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Get the id the next packet will carry.
    #[must_use]
    pub const fn current(&self) -> u8 {
        self.0
    }

    /// Get the next packet id and advance the counter.
    pub fn next(&mut self) -> u8 {
        let id = self.0;
        self.0 = self.0.wrapping_add(1);
        id
    }

    /// Restart the counter for a new command phase.
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Encode `message` and append it to `dst` as one or more packets.
///
/// The counter is reset first when the message starts a new command phase.
/// Returns the number of packets written. On error nothing is appended and
/// the counter is left as it was before the call.
pub fn write_message(
    message: &dyn ClientMessage,
    alloc: &dyn BufferAllocator,
    session: &Session,
    sequence: &mut SequenceId,
    dst: &mut BytesMut,
) -> Result<usize, ProtocolError> {
    let payload = message.encode(alloc, session)?;

    if message.resets_sequence() {
        sequence.reset();
    }

    Ok(write_payload(&payload, sequence, dst))
}

/// Split `payload` into packets and append them to `dst`.
///
/// Returns the number of packets written.
pub fn write_payload(payload: &[u8], sequence: &mut SequenceId, dst: &mut BytesMut) -> usize {
    let packets = payload.len() / MAX_PAYLOAD_SIZE + 1;
    dst.reserve(payload.len() + packets * PACKET_HEADER_SIZE);

    for chunk in payload.chunks(MAX_PAYLOAD_SIZE) {
        let header = PacketHeader {
            length: chunk.len() as u32,
            sequence_id: sequence.next(),
        };
        header.encode(dst);
        dst.put_slice(chunk);
    }

    // Terminating empty packet.
    if payload.len() % MAX_PAYLOAD_SIZE == 0 {
        let header = PacketHeader {
            length: 0,
            sequence_id: sequence.next(),
        };
        header.encode(dst);
    }

    packets
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::buffer::HeapAllocator;
    use crate::exit::ExitMessage;
    use crate::query::QueryMessage;

    /// A continuation message that keeps the current sequence.
    #[derive(Debug)]
    struct AuthSwitchResponse(&'static [u8]);

    impl ClientMessage for AuthSwitchResponse {
        fn resets_sequence(&self) -> bool {
            false
        }

        fn encode(
            &self,
            alloc: &dyn BufferAllocator,
            _session: &Session,
        ) -> Result<Bytes, ProtocolError> {
            let mut buf = alloc.buffer(self.0.len())?;
            buf.put_slice(self.0);
            Ok(Bytes::from(buf))
        }
    }

    #[test]
    fn test_header_roundtrip() {
        let header = PacketHeader::new(0x01_02_03, 7).unwrap();

        let bytes = header.encode_to_bytes();
        assert_eq!(&bytes[..], &[0x03, 0x02, 0x01, 0x07]);

        let mut cursor = bytes.as_ref();
        let decoded = PacketHeader::decode(&mut cursor).unwrap();
        assert_eq!(header, decoded);
    }

    #[test]
    fn test_header_too_large() {
        assert!(PacketHeader::new(MAX_PAYLOAD_SIZE, 0).is_ok());
        assert_eq!(
            PacketHeader::new(MAX_PAYLOAD_SIZE + 1, 0),
            Err(ProtocolError::PayloadTooLarge {
                size: MAX_PAYLOAD_SIZE + 1,
                max: MAX_PAYLOAD_SIZE
            })
        );
    }

    #[test]
    fn test_header_incomplete() {
        let mut cursor: &[u8] = &[0x01, 0x00];
        assert_eq!(
            PacketHeader::decode(&mut cursor),
            Err(ProtocolError::IncompletePacket {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn test_sequence_wraps() {
        let mut seq = SequenceId::new();
        for expected in 0..=255_u8 {
            assert_eq!(seq.next(), expected);
        }
        assert_eq!(seq.current(), 0);
    }

    #[test]
    fn test_write_exit_message() {
        let mut seq = SequenceId::new();
        seq.next();
        seq.next();

        let mut dst = BytesMut::new();
        let packets = write_message(
            ExitMessage::instance(),
            &HeapAllocator::new(),
            &Session::default(),
            &mut seq,
            &mut dst,
        )
        .unwrap();

        assert_eq!(packets, 1);
        assert_eq!(&dst[..], &[0x01, 0x00, 0x00, 0x00, 0x01]);
        assert_eq!(seq.current(), 1);
    }

    #[test]
    fn test_continuation_keeps_sequence() {
        let mut seq = SequenceId::new();
        seq.next();
        seq.next();

        let mut dst = BytesMut::new();
        write_message(
            &AuthSwitchResponse(b"xy"),
            &HeapAllocator::new(),
            &Session::default(),
            &mut seq,
            &mut dst,
        )
        .unwrap();

        assert_eq!(&dst[..], &[0x02, 0x00, 0x00, 0x02, b'x', b'y']);
        assert_eq!(seq.current(), 3);
    }

    #[test]
    fn test_failed_encode_leaves_state_untouched() {
        let mut seq = SequenceId::new();
        seq.next();

        let mut dst = BytesMut::new();
        let err = write_message(
            ExitMessage::instance(),
            &HeapAllocator::with_limit(0),
            &Session::default(),
            &mut seq,
            &mut dst,
        )
        .unwrap_err();

        assert!(err.is_allocation_failure());
        assert!(dst.is_empty());
        assert_eq!(seq.current(), 1);
    }

    #[test]
    fn test_empty_payload_is_one_packet() {
        let mut seq = SequenceId::new();
        let mut dst = BytesMut::new();
        assert_eq!(write_payload(&[], &mut seq, &mut dst), 1);
        assert_eq!(&dst[..], &[0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_max_payload_gets_trailing_empty_packet() {
        // Command byte plus MAX - 1 bytes of text fills one packet exactly.
        let sql = "x".repeat(MAX_PAYLOAD_SIZE - 1);
        let mut seq = SequenceId::new();
        let mut dst = BytesMut::new();

        let packets = write_message(
            &QueryMessage::new(sql),
            &HeapAllocator::new(),
            &Session::default(),
            &mut seq,
            &mut dst,
        )
        .unwrap();

        assert_eq!(packets, 2);
        assert_eq!(dst.len(), MAX_PAYLOAD_SIZE + 2 * PACKET_HEADER_SIZE);

        let mut cursor = &dst[..];
        let first = PacketHeader::decode(&mut cursor).unwrap();
        assert_eq!(first.payload_length(), MAX_PAYLOAD_SIZE);
        assert_eq!(first.sequence_id, 0);
        assert!(first.has_continuation());

        cursor.advance(MAX_PAYLOAD_SIZE);
        let second = PacketHeader::decode(&mut cursor).unwrap();
        assert_eq!(second.payload_length(), 0);
        assert_eq!(second.sequence_id, 1);
        assert!(!cursor.has_remaining());
    }

    #[test]
    fn test_large_payload_splits() {
        let payload = vec![0xAB_u8; MAX_PAYLOAD_SIZE + 10];
        let mut seq = SequenceId::new();
        let mut dst = BytesMut::new();

        assert_eq!(write_payload(&payload, &mut seq, &mut dst), 2);

        let mut cursor = &dst[..];
        let first = PacketHeader::decode(&mut cursor).unwrap();
        assert_eq!(first.payload_length(), MAX_PAYLOAD_SIZE);
        cursor.advance(MAX_PAYLOAD_SIZE);

        let second = PacketHeader::decode(&mut cursor).unwrap();
        assert_eq!(second.payload_length(), 10);
        assert_eq!(second.sequence_id, 1);
        assert_eq!(cursor.remaining(), 10);
    }
}
